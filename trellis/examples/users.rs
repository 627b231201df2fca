//! Drives a user table and an email field through a few interactions and
//! prints each view as text.
//!
//! Set `TRELLIS_LOG=debug` (or `trace`) to see widget logging.

use std::error::Error;

use log::{LevelFilter, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use trellis::prelude::*;

#[derive(Debug, Clone)]
struct User {
    id: u32,
    name: &'static str,
    email: &'static str,
    role: &'static str,
    status: &'static str,
    join_date: &'static str,
}

fn sample_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "John Doe",
            email: "john.doe@example.com",
            role: "Admin",
            status: "active",
            join_date: "2023-01-15",
        },
        User {
            id: 2,
            name: "Jane Smith",
            email: "jane.smith@example.com",
            role: "User",
            status: "active",
            join_date: "2023-02-20",
        },
        User {
            id: 3,
            name: "Bob Johnson",
            email: "bob.johnson@example.com",
            role: "User",
            status: "inactive",
            join_date: "2023-03-10",
        },
        User {
            id: 4,
            name: "Alice Brown",
            email: "alice.brown@example.com",
            role: "Moderator",
            status: "active",
            join_date: "2023-01-05",
        },
        User {
            id: 5,
            name: "Charlie Wilson",
            email: "charlie.wilson@example.com",
            role: "User",
            status: "active",
            join_date: "2023-04-12",
        },
    ]
}

fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("id", "ID", |u: &User| u.id).sortable(),
        Column::new("name", "Name", |u: &User| u.name).sortable(),
        Column::new("email", "Email", |u: &User| u.email).sortable(),
        Column::new("role", "Role", |u: &User| u.role).sortable(),
        Column::new("status", "Status", |u: &User| u.status).sortable(),
        Column::new("joinDate", "Join Date", |u: &User| u.join_date).sortable(),
    ]
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    let Ok(level) = std::env::var("TRELLIS_LOG") else {
        return Ok(());
    };
    let level: LevelFilter = level.parse().map_err(|e| format!("TRELLIS_LOG: {e}"))?;
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .map_err(|e| e.to_string())?;
    Ok(())
}

fn print_table(view: &TableView) {
    match view {
        TableView::Loading { message } => println!("  ... {message}"),
        TableView::Empty { title, description } => println!("  {title}\n  {description}"),
        TableView::Populated { header, rows } => {
            let mut widths: Vec<usize> = header.cells.iter().map(|c| c.title.len() + 2).collect();
            for row in rows {
                for (width, cell) in widths.iter_mut().zip(&row.cells) {
                    *width = (*width).max(cell.len());
                }
            }

            let mut line = match header.select {
                Some(CheckState::Checked) => "[x] ".to_string(),
                Some(CheckState::Indeterminate) => "[-] ".to_string(),
                Some(CheckState::Unchecked) => "[ ] ".to_string(),
                None => String::new(),
            };
            for (cell, &width) in header.cells.iter().zip(&widths) {
                let arrow = match cell.indicator {
                    SortIndicator::None => "",
                    SortIndicator::Idle => " ~",
                    SortIndicator::Ascending => " ^",
                    SortIndicator::Descending => " v",
                };
                line.push_str(&format!("{:<width$} ", format!("{}{}", cell.title, arrow)));
            }
            println!("  {}", line.trim_end());

            for row in rows {
                let mut line = match row.selected {
                    Some(true) => "[x] ".to_string(),
                    Some(false) => "[ ] ".to_string(),
                    None => String::new(),
                };
                for (cell, &width) in row.cells.iter().zip(&widths) {
                    line.push_str(&format!("{cell:<width$} "));
                }
                println!("  {}", line.trim_end());
            }
        }
    }
}

fn print_input(view: &InputView) {
    let label = view.label.as_deref().unwrap_or("");
    let value = if view.value.is_empty() {
        view.placeholder.clone().unwrap_or_default()
    } else {
        view.value.clone()
    };
    let buttons: Vec<_> = view
        .trailing
        .iter()
        .map(|a| match a {
            Affordance::Clear { .. } => "(x)",
            Affordance::Reveal { .. } => "(show)",
            Affordance::Conceal { .. } => "(hide)",
        })
        .collect();
    println!("  {label}: [{value}] {}", buttons.join(" "));
    match &view.footer {
        Footer::Helper(text) => println!("    {text}"),
        Footer::Error(message) => println!("    ! {message}"),
        Footer::None => {}
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging()?;

    let table = Table::new(user_columns())?
        .with_config(TableConfig::default().selectable().loading(true))
        .on_selection_change(|rows: &[User]| {
            let names: Vec<_> = rows.iter().map(|u| u.name).collect();
            info!("selected: {names:?}");
        });

    println!("Loading:");
    print_table(&table.render());

    table.set_loading(false);
    println!("\nNo rows:");
    print_table(&table.render());

    table.set_rows(sample_users());
    table.handle_event(&TableEvent::HeaderClick("joinDate".into()));
    table.handle_event(&TableEvent::RowCheck {
        position: 0,
        checked: true,
    });
    table.handle_event(&TableEvent::RowCheck {
        position: 1,
        checked: true,
    });
    println!("\nSorted by join date, first two checked:");
    print_table(&table.render());

    let selected: Vec<_> = table.selected_rows().iter().map(|u| u.id).collect();
    println!("  selected ids: {selected:?}");

    let email = InputField::from_config(
        InputConfig::default()
            .label("Email")
            .placeholder("you@example.com")
            .helper_text("Used to sign in")
            .clearable(),
    );
    email.handle_event(&InputEvent::Changed("not-an-email".into()));

    let result = Validator::new()
        .field(&email, "email")
        .required("Email is required")
        .email("Please enter a valid email")
        .validate();

    println!("\nInput after validation:");
    print_input(&email.render());
    if let Some(error) = result.first_error() {
        println!("  {error}");
    }

    email.handle_event(&InputEvent::ClearClicked);
    println!("\nInput after clearing:");
    print_input(&email.render());

    Ok(())
}
