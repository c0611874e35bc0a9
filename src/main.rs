/*
 *  Iris - Discord bot for ranking emoji usage across a server.
 *  Copyright (C) 2026  Iris contributors
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */
mod commands;
mod count;
mod emoji;
mod graph;
mod resolve;
mod scan;
mod timeframe;
mod utils;

use getset::Getters;
use poise::serenity_prelude as serenity;
use std::env;

/* Poise-required data types: */

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Data, Error>;
// User data:
/**
 * Per-process state injected into every command handler. Nothing in here is
 * mutable; each command run builds its own tally from scratch.
 */
#[derive(Getters)]
pub struct Data {
    #[getset(get = "pub")]
    config: utils::BotConfig,
}

async fn ready(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    _data: &Data,
) -> Result<(), Error> {
    match event {
        // Ready (bot is started):
        serenity::FullEvent::Ready { data_about_bot, .. } => {
            match data_about_bot.user.discriminator {
                Some(discriminator) => {
                    println!(
                        "{}#{discriminator:#?} is connected.",
                        data_about_bot.user.name
                    )
                }
                None => println!("{} is connected.", data_about_bot.user.name),
            }
            println!("Serving {} guild(s).", data_about_bot.guilds.len());

            ctx.set_presence(
                Some(serenity::ActivityData::watching("the emoji fly by")),
                serenity::OnlineStatus::Online,
            );
        }
        // Guild create (the bot joins a new server):
        serenity::FullEvent::GuildCreate { guild, is_new } => {
            if *is_new == Some(true) {
                println!("Iris entered the guild {} ({}).", guild.name, guild.id);
            }
        }

        _ => {}
    }

    Ok(())
}

/**
 * Command-boundary error handler: the full detail goes to the operator log,
 * the user only ever sees a generic retry message.
 */
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            panic!("Could not set up the bot: {:?}", error)
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            eprintln!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(err) = ctx
                .say("Something went wrong while running this command. Please try again later.")
                .await
            {
                eprintln!("Failed to send the error reply: {}", err);
            }
        }
        error => {
            if let Err(err) = poise::builtins::on_error(error).await {
                eprintln!("Error while handling error: {}", err);
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let token = env::var("DISCORD_TOKEN")
        .expect("Discord token not provided (in DISCORD_TOKEN environmental variable).");
    let config = utils::load_config();
    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::GUILD_MESSAGE_REACTIONS
        | serenity::GatewayIntents::GUILD_EMOJIS_AND_STICKERS
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::help::help(),
                commands::leaderboard::leaderboard(),
                commands::license::license(),
                commands::underused::underused_emojis(),
            ],
            event_handler: |ctx, event, framework, data| {
                Box::pin(ready(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands)
                    .await
                    .expect("Could not register the commands.");
                Ok(Data { config })
            })
        })
        .build();

    let mut client = serenity::Client::builder(token, intents)
        .framework(framework) // For command handling, using poise.
        .await
        .expect("Could not create the Discord bot client object.");

    client.start().await.expect("The Discord bot crashed.");
}
