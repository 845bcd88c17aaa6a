use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Date, Duration, OffsetDateTime};

use spendwise::{
    ExpenseFields, SubscriptionFields, expenses::create_expense, initialize_db,
    subscriptions::create_subscription,
};

/// A utility for creating a test database for the spendwise server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if output_path
        .extension()
        .is_none_or(|extension| extension.is_empty())
    {
        eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
        exit(1);
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let connection = Connection::open(output_path)?;

    initialize_db(&connection)?;

    println!("Creating test expenses...");
    let today = OffsetDateTime::now_utc().date();
    create_test_expenses(today, &connection)?;

    println!("Creating test subscriptions...");
    create_test_subscriptions(&connection)?;

    println!("Success!");

    Ok(())
}

fn create_test_expenses(today: Date, connection: &Connection) -> Result<(), Box<dyn Error>> {
    let expenses = [
        (0, "groceries", 84.20, Some("Weekly shop"), "card"),
        (1, "transport", 3.50, Some("Bus fare"), "card"),
        (1, "food", 12.50, Some("Lunch"), "cash"),
        (3, "entertainment", 25.00, None, "card"),
        (6, "groceries", 61.85, None, "card"),
        (9, "utilities", 120.00, Some("Power bill"), "bank transfer"),
        (14, "food", 38.00, Some("Dinner with friends"), "card"),
    ];

    for (days_ago, category, amount, description, payment_method) in expenses {
        create_expense(
            ExpenseFields {
                date: today - Duration::days(days_ago),
                category: category.to_owned(),
                amount,
                description: description.map(str::to_owned),
                payment_method: payment_method.to_owned(),
            },
            connection,
        )?;
    }

    Ok(())
}

fn create_test_subscriptions(connection: &Connection) -> Result<(), Box<dyn Error>> {
    let subscriptions = [
        ("Netflix", 15.99, 15, "entertainment", "card", true),
        ("Spotify", 11.99, 3, "entertainment", "card", true),
        ("Gym", 40.00, 1, "health", "bank transfer", false),
        ("Cloud storage", 2.99, 31, "utilities", "card", true),
    ];

    for (name, amount, billing_day, category, payment_method, active) in subscriptions {
        create_subscription(
            SubscriptionFields {
                name: name.to_owned(),
                amount,
                billing_day,
                category: category.to_owned(),
                payment_method: payment_method.to_owned(),
                active,
            },
            connection,
        )?;
    }

    Ok(())
}
