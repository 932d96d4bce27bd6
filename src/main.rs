//! # Main Entry Point
//!
//! Initializes the leave-tracking bot:
//! - Domain: Configuration, Records and Traits
//! - Infrastructure: Matrix, Record Stores
//! - Application: Router, Session State, Limits
//! - Interface: Conversation Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;
#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::registry::TeamRegistry;
use crate::application::router::CommandRouter;
use crate::application::state::BotState;
use crate::domain::config::{AppConfig, StorageBackend};
use crate::domain::paths;
use crate::domain::traits::RecordStore;
use crate::infrastructure::matrix::MatrixService;
use crate::infrastructure::memory::MemoryRecordStore;
use crate::infrastructure::store::FileRecordStore;
use crate::strings::logs;

#[derive(Parser, Debug)]
#[command(name = "vacabot", about = "Matrix bot for tracking team vacations and other leave")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = paths::DEFAULT_CONFIG_FILE)]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&args.config)?;

    // 2. Logging Setup
    // Ensure data directory exists
    let data_dir = Path::new(&config.storage.data_dir);
    if !data_dir.exists() {
        fs::create_dir_all(data_dir).context("Failed to create data directory")?;
    }

    // Clear previous session log
    let log_path = data_dir.join(paths::SESSION_LOG_FILE);
    if log_path.exists() {
        let _ = fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(data_dir, paths::SESSION_LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(
            "info,matrix_sdk=warn,matrix_sdk_base=warn,matrix_sdk_crypto=error,ruma=warn,hyper=warn",
        )
    });

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::info!("Starting vacabot...");
    tracing::info!(
        "{}",
        logs::config_loaded(&config.services.matrix.username, &args.config)
    );

    // 3. Storage and in-memory state
    let store: Arc<dyn RecordStore> = match config.storage.backend {
        StorageBackend::File => Arc::new(FileRecordStore::new(config.storage.clone())),
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; records are lost on restart");
            Arc::new(MemoryRecordStore::new())
        }
    };

    let teams = TeamRegistry::hydrate(store.as_ref())
        .await
        .context("Failed to read known teams")?;
    tracing::info!("{}", logs::teams_loaded(teams.len()));

    let state = Arc::new(Mutex::new(BotState::new(teams)));
    let router = Arc::new(CommandRouter::new(config.clone(), store, state));

    // 4. Matrix Setup
    let client = Client::builder()
        .homeserver_url(&config.services.matrix.homeserver)
        .build()
        .await?;

    client
        .matrix_auth()
        .login_username(
            &config.services.matrix.username,
            &config.services.matrix.password,
        )
        .send()
        .await?;

    tracing::info!("{}", logs::LOGIN_SUCCESS);

    if let Some(name) = &config.services.matrix.display_name {
        tracing::info!("{}", logs::setting_display_name(name));
        if let Err(e) = client.account().set_display_name(Some(name)).await {
            tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
        }
    }

    // 5. Event Loop
    let start_time = std::time::SystemTime::now();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = router.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            // Ignore events older than start_time
            let ts = ev.origin_server_ts();
            let event_time =
                std::time::UNIX_EPOCH + std::time::Duration::from_millis(ts.get().into());
            if event_time < start_time {
                return;
            }

            if let MessageType::Text(text_content) = &original_msg.content.msgtype {
                if Some(original_msg.sender.as_ref()) == room.client().user_id() {
                    return;
                }
                tracing::info!(
                    "Received message from {}: \n{}",
                    original_msg.sender,
                    text_content.body
                );

                let chat = MatrixService::new(room);
                if let Err(e) = router
                    .route(&chat, &text_content.body, original_msg.sender.as_str())
                    .await
                {
                    tracing::error!("Failed to route message: {}", e);
                }
            }
        }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            tracing::info!("{}", logs::invite_received(room.room_id().as_str()));
            if let Err(e) = room.join().await {
                tracing::warn!("{}", logs::join_invite_fail(&e.to_string()));
            }
        }
    });

    // 6. Sync until terminated
    tracing::info!("{}", logs::SYNC_LOOP_START);
    if let Err(e) = client.sync(SyncSettings::default()).await {
        tracing::error!("{}", logs::sync_loop_fail(&e.to_string()));
        return Err(e.into());
    }

    Ok(())
}
