use std::fs;
use std::path::PathBuf;

use clap::Parser;

use mailfold::{InMemoryStore, Message, thread_folder};

#[derive(Parser, Debug)]
#[command(
    name = "fold_folder",
    about = "Fold a folder of messages into conversation threads"
)]
struct Args {
    /// JSON file holding an array of messages (mail_id, folder, header
    /// values, received_date).
    #[arg(long)]
    input: PathBuf,

    /// Folder to thread.
    #[arg(long, default_value = "INBOX")]
    folder: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();

    let raw = fs::read_to_string(&args.input)?;
    let messages: Vec<Message> = serde_json::from_str(&raw)?;

    let mut store = InMemoryStore::new();
    for message in messages {
        store.add_message(message);
    }

    let threads = thread_folder(&store, &args.folder)?;

    println!("{} thread(s) in {}", threads.len(), args.folder);
    for (i, thread) in threads.iter().enumerate() {
        println!("thread #{} ({} message(s)):", i + 1, thread.len());
        for message in thread.messages() {
            println!(
                "  {}  {}  {}",
                message.received_date.to_rfc3339(),
                message.message_id.as_deref().unwrap_or("-"),
                message.subject
            );
        }
    }

    Ok(())
}
