use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repovista_api::{RepoListQuery, RepoSort, RepoType, SortDirection};
use repovista_core::{config, format, GitHubProvider, RepositoryProvider};

#[derive(Parser)]
#[command(name = "repovista")]
#[command(version, about = "Browse an organization's public GitHub repositories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List the organization's repositories
    List {
        /// Page number to fetch
        #[arg(long)]
        page: Option<u32>,
        /// Results per page (max 100)
        #[arg(long)]
        per_page: Option<u32>,
        /// Repository type: all, public, forks, sources, member
        #[arg(long = "type")]
        repo_type: Option<RepoType>,
        /// Sort field: created, updated, pushed, full_name
        #[arg(long)]
        sort: Option<RepoSort>,
        /// Sort direction: asc, desc
        #[arg(long)]
        direction: Option<SortDirection>,
    },
    /// Show one repository's details
    Show {
        /// Repository name within the organization
        name: String,
    },
    /// Show a repository's language breakdown
    Languages {
        /// Repository name within the organization
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repovista=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let provider = GitHubProvider::new();

    match cli.command {
        Commands::List {
            page,
            per_page,
            repo_type,
            sort,
            direction,
        } => {
            let query = RepoListQuery {
                repo_type,
                sort,
                direction,
                page,
                per_page,
            };
            tracing::debug!(?query, "listing repositories");
            let repos = provider.list_repositories(&query).await?;

            for repo in &repos {
                println!(
                    "{:<40} ★ {:<6} ⑂ {:<5} updated {}",
                    repo.name,
                    repo.stars,
                    repo.forks,
                    format::relative_time(&repo.updated_at.to_rfc3339())
                );
            }

            let page = page.unwrap_or(config::DEFAULT_PAGE);
            let per_page = per_page.unwrap_or(config::DEFAULT_PER_PAGE);
            println!(
                "\npage {} of {} ({} repositories in {})",
                page,
                config::total_pages(per_page),
                config::TOTAL_REPOSITORY_COUNT,
                config::ORGANIZATION,
            );
        }
        Commands::Show { name } => {
            let repo = provider.repository_details(&name).await?;

            println!("{}", repo.full_name);
            if let Some(description) = &repo.description {
                println!("{description}");
            }
            println!();
            println!(
                "Stars: {}  Forks: {}  Watchers: {}  Open issues: {}",
                repo.stars, repo.forks, repo.watchers, repo.open_issues
            );
            println!(
                "Size: {}",
                format::humanize_kilobytes(repo.size_kb as f64, 2)
            );
            println!("Default branch: {}", repo.default_branch);
            if let Some(language) = &repo.language {
                println!("Language: {language}");
            }
            if let Some(license) = &repo.license {
                println!("License: {}", format::title_case(license));
            }
            if !repo.topics.is_empty() {
                println!("Topics: {}", repo.topics.join(", "));
            }
            println!(
                "Created: {}",
                format::absolute_date(&repo.created_at.to_rfc3339())
            );
            println!(
                "Updated: {}",
                format::relative_time(&repo.updated_at.to_rfc3339())
            );
            println!("URL: {}", repo.url);
        }
        Commands::Languages { name } => {
            let languages = provider.repository_languages(&name).await?;
            let entries = format::language_percentages(&languages);

            if entries.is_empty() {
                println!("No language data for {name}");
            } else {
                for entry in entries {
                    println!("{:>6}%  {}", entry.percentage, entry.language);
                }
            }
        }
    }

    Ok(())
}
