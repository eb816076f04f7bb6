use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use family_tree::config::{ServerConfig, DEFAULT_EXPORT_FILE};
use family_tree::models::*;
use family_tree::store::{with_json_extension, FamilyTree};
use family_tree::{api, render};

#[derive(Parser)]
#[command(name = "ftree")]
#[command(about = "Build a family tree as JSON and serve the browser editor")]
struct Cli {
    /// Document read and written by the editing commands
    #[arg(short, long, global = true, default_value = DEFAULT_EXPORT_FILE)]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the save endpoint and the editor's static files
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port for HTTP
        #[arg(short, long)]
        port: Option<u16>,

        /// Document written by /save
        #[arg(long)]
        data_file: Option<PathBuf>,

        /// Directory served as static files
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
    /// Add a person
    AddPerson {
        /// Full name
        name: String,

        /// Custom id instead of one generated from the name
        #[arg(long)]
        id: Option<String>,

        /// M, F, Other or any other text
        #[arg(short, long)]
        gender: Option<String>,

        /// Nickname or alternate name (repeatable)
        #[arg(short, long = "alias")]
        aliases: Vec<String>,

        #[arg(long)]
        birth_year: Option<i32>,

        #[arg(long)]
        death_year: Option<i32>,

        #[arg(long)]
        notes: Option<String>,

        /// Make this person the root (first person only)
        #[arg(long)]
        root: bool,
    },
    /// Record a marriage or partnership
    AddSpouse {
        first: String,
        second: String,

        /// Marriage year
        #[arg(long)]
        start_year: Option<i32>,

        /// Divorce or death year
        #[arg(long)]
        end_year: Option<i32>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Record a parent and child
    AddParentChild {
        parent: String,
        child: String,

        /// Not a biological relationship
        #[arg(long)]
        adopted: bool,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Set the root person
    SetRoot { id: String },
    /// Edit title, notes or root person
    EditMeta {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long)]
        root: Option<String>,
    },
    /// List all people
    People,
    /// Show the whole tree
    Show,
    /// Replace the document with an empty tree
    Reset {
        /// Confirm deleting all data
        #[arg(long)]
        yes: bool,
    },
    /// Write the sample family
    Example,
}

/// Initialize tracing with output to stderr (editing commands) or stdout (server)
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "family_tree=info,tower_http=debug".into()),
    );

    if use_stderr {
        // Editing commands print results on stdout
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Load the document at `path`, or start empty if there is none yet.
fn open(path: &Path) -> anyhow::Result<FamilyTree> {
    let mut tree = FamilyTree::new();
    if path.exists() {
        tree.import(path)?;
    }
    Ok(tree)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = !matches!(cli.command, Commands::Serve { .. });
    init_tracing(use_stderr);

    let path = with_json_extension(&cli.file);

    match cli.command {
        Commands::Serve {
            host,
            port,
            data_file,
            static_dir,
        } => {
            let mut config = ServerConfig::from_env();
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(data_file) = data_file {
                config.data_file = data_file;
            }
            if let Some(static_dir) = static_dir {
                config.static_dir = static_dir;
            }

            let addr = config.bind_addr();
            tracing::info!("Serving files from {}", config.static_dir.display());
            tracing::info!("/save endpoint writes to {}", config.data_file.display());

            let app = api::create_router(config);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Family tree server listening on http://{}", addr);

            axum::serve(listener, app).await?;
        }
        Commands::AddPerson {
            name,
            id,
            gender,
            aliases,
            birth_year,
            death_year,
            notes,
            root,
        } => {
            let mut tree = open(&path)?;
            let person = tree.add_person(NewPerson {
                name,
                id,
                gender: gender.as_deref().and_then(Gender::parse_input),
                aliases,
                birth_year,
                death_year,
                notes,
                set_as_root: root,
            })?;
            let id = person.id.clone();
            println!("Added: {} (ID: {})", person.name, id);
            if root && tree.meta().root_person_id.as_deref() == Some(id.as_str()) {
                println!("Set as root person");
            }
            tree.export(&path)?;
        }
        Commands::AddSpouse {
            first,
            second,
            start_year,
            end_year,
            notes,
        } => {
            let mut tree = open(&path)?;
            tree.add_spouse(NewSpouse {
                first: first.trim().to_string(),
                second: second.trim().to_string(),
                start_year,
                end_year,
                notes,
            })?;
            println!(
                "Added spouse relationship between {} and {}",
                tree.name_or_id(first.trim()),
                tree.name_or_id(second.trim())
            );
            tree.export(&path)?;
        }
        Commands::AddParentChild {
            parent,
            child,
            adopted,
            notes,
        } => {
            let mut tree = open(&path)?;
            tree.add_parent_child(NewParentChild {
                parent_id: parent.trim().to_string(),
                child_id: child.trim().to_string(),
                biological: !adopted,
                notes,
            })?;
            println!(
                "Added parent-child relationship: {} -> {}",
                tree.name_or_id(parent.trim()),
                tree.name_or_id(child.trim())
            );
            tree.export(&path)?;
        }
        Commands::SetRoot { id } => {
            let mut tree = open(&path)?;
            tree.set_root(id.trim())?;
            println!("Root set to {}", tree.name_or_id(id.trim()));
            tree.export(&path)?;
        }
        Commands::EditMeta { title, notes, root } => {
            let mut tree = open(&path)?;
            tree.update_meta(MetaUpdate {
                title,
                notes,
                root_person_id: root.map(|id| id.trim().to_string()),
            })?;
            println!("Metadata updated");
            tree.export(&path)?;
        }
        Commands::People => {
            let tree = open(&path)?;
            print!("{}", render::render_people(&tree));
        }
        Commands::Show => {
            let tree = open(&path)?;
            print!("{}", render::render_summary(&tree));
        }
        Commands::Reset { yes } => {
            if !yes {
                anyhow::bail!("This deletes all data in {}; pass --yes to confirm", path.display());
            }
            FamilyTree::new().write_to(&path)?;
            println!("Created new empty tree in {}", path.display());
        }
        Commands::Example => {
            let mut tree = FamilyTree::example()?;
            let written = tree.export(&path)?;
            println!("Wrote example family tree to {}", written.display());
        }
    }

    Ok(())
}
