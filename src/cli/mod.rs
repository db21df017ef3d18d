pub mod client;
pub mod utils;

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::models::Person;
use client::PeopleClient;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/people";

#[derive(Parser)]
#[command(name = "people")]
#[command(about = "People CLI - command-line client for the People REST API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, env = "PEOPLE_API_URL", default_value = DEFAULT_API_URL, help = "Base URL of the people resource")]
    pub url: String,

    #[arg(long, global = true, default_value_t = 8000, help = "Per-request timeout in milliseconds")]
    pub timeout_ms: u64,

    #[arg(long, global = true, default_value_t = 2, help = "Attempts for list, create and update")]
    pub retries: usize,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List every person")]
    List,

    #[command(about = "Show one person by dni")]
    Get {
        #[arg(help = "National id")]
        dni: String,
    },

    #[command(about = "Create a person")]
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        dni: String,
        #[arg(long, allow_negative_numbers = true)]
        age: i32,
    },

    #[command(about = "Replace name and age of an existing person")]
    Update {
        #[arg(help = "National id")]
        dni: String,
        #[arg(long)]
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        age: i32,
    },

    #[command(about = "Delete a person by dni")]
    Delete {
        #[arg(help = "National id")]
        dni: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = PeopleClient::new(&cli.url, Duration::from_millis(cli.timeout_ms), cli.retries)?;

    match cli.command {
        Commands::List => {
            let people = client.list().await?;
            utils::output_people(output_format, &people)
        }
        Commands::Get { dni } => {
            let person = client.get(&dni).await?;
            utils::output_person(output_format, &person)
        }
        Commands::Create { name, dni, age } => {
            let created = client.create(&Person::new(name, dni, age)).await?;
            utils::output_person(output_format, &created)
        }
        Commands::Update { dni, name, age } => {
            let updated = client.update(&dni, &name, age).await?;
            utils::output_person(output_format, &updated)
        }
        Commands::Delete { dni } => {
            client.delete(&dni).await?;
            utils::output_success(output_format, &format!("Deleted {}", dni))
        }
    }
}
