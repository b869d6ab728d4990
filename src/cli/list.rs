//! One-shot people listing for CLI mode

use crate::api::{PeopleClient, Person};
use crate::cli::commands::ListArgs;
use crate::core::config::Config;
use crate::error::Result;

/// Fetch and print people rows without entering the TUI
pub async fn handle_list(args: ListArgs, config: Config) -> Result<()> {
    let client = PeopleClient::from_config(&config)?;

    if args.all {
        let mut page = 1;
        loop {
            let payload = client.fetch_page(page).await?;
            print_rows(&payload.results);
            if !payload.has_next() {
                break;
            }
            page += 1;
        }
    } else {
        let payload = client.fetch_page(args.page).await?;
        print_rows(&payload.results);
    }

    Ok(())
}

fn print_rows(people: &[Person]) {
    for person in people {
        println!("{}\t{}", person.name, person.gender);
    }
}
