use tokenwatch::{ClientConfig, LogNotifier, View, ViewState, WatchlistController};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Terminal presentation binding: renders the two buckets and the current
/// search outcome, dispatches typed commands to the controller.
struct TerminalView;

impl View for TerminalView {
    fn render(&mut self, state: &ViewState) {
        if let Some(search) = &state.search {
            println!("\nSearch results for {}:", search.contract);
            if search.failed {
                println!("  (search failed, no data)");
            } else if search.results.is_empty() {
                println!("  (no matches)");
            } else {
                for result in &search.results {
                    let mark = if result.has_interacted {
                        "interacted"
                    } else {
                        "no interaction"
                    };
                    println!("  {:<46} {}", result.address, mark);
                }
            }
        }

        println!("\nWatchlist ({}):", state.watchlist.len());
        for wallet in &state.watchlist {
            println!("  {:<46} added {}", wallet.address, wallet.display_date());
        }
        println!("Stored addresses ({}):", state.stored.len());
        for wallet in &state.stored {
            println!("  {:<46} added {}", wallet.address, wallet.display_date());
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  search <contract>   check stored addresses against a token contract");
    println!("  add <address>       add a wallet to the watchlist");
    println!("  store <address>     move a watchlist entry to stored");
    println!("  watch <address>     move a stored entry back to the watchlist");
    println!("  rm <address>        remove a watchlist entry");
    println!("  list                re-render the current state");
    println!("  quit                exit");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ClientConfig::from_env();
    let mut controller = WatchlistController::new(&config, Box::new(LogNotifier));
    let mut view = TerminalView;

    controller.start().await;
    view.render(&controller.view_state());
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match command {
            "" => continue,
            "search" => controller.submit_search(arg).await,
            "add" => controller.add_wallet(arg).await,
            "store" => controller.move_to_store(arg).await,
            "watch" => controller.move_to_watchlist(arg).await,
            "rm" => controller.remove_from_watchlist(arg).await,
            "list" => {}
            "help" => {
                print_help();
                continue;
            }
            "quit" | "exit" => break,
            other => {
                println!("Unknown command: {}", other);
                print_help();
                continue;
            }
        }

        view.render(&controller.view_state());
    }

    Ok(())
}
