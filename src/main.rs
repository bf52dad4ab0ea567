use clap::Parser;
use cli::{Cli, Command};
use color_eyre::eyre::{Result, WrapErr, bail};
use jobgestion::{
    applications::{ApplicationFields, ApplicationRecord},
    attachments::{self, Attachment},
    config::Settings,
    logging,
    pagination::Navigation,
    query::SortState,
    store::RecordStore,
    view::ViewState,
};

mod cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let settings = Settings::resolve(cli.file, cli.page_size as usize)?;
    let mut store = RecordStore::open(&settings.data_file)
        .wrap_err("Failed to load applications")?;

    match cli.command {
        Command::Add {
            company,
            title,
            cover_letter,
            screenshot,
            status,
            comment,
        } => {
            let index = store
                .create(ApplicationFields {
                    company_name: company,
                    job_title: title,
                    cover_letter_path: cover_letter,
                    screenshot_path: screenshot,
                    status,
                    comment,
                })
                .wrap_err("Failed to save application")?;

            println!("Saved application #{}", index + 1);
        }
        Command::Edit {
            number,
            company,
            title,
            cover_letter,
            screenshot,
            status,
            comment,
        } => {
            let index = position(number)?;
            let mut fields = store.database().get(index)?.fields();

            if let Some(company) = company {
                fields.company_name = company;
            }
            if let Some(title) = title {
                fields.job_title = title;
            }
            if let Some(cover_letter) = cover_letter {
                fields.cover_letter_path = cover_letter;
            }
            if let Some(screenshot) = screenshot {
                fields.screenshot_path = screenshot;
            }
            if let Some(status) = status {
                fields.status = status;
            }
            if let Some(comment) = comment {
                fields.comment = comment;
            }

            store
                .update(index, fields)
                .wrap_err("Failed to save application")?;

            println!("Updated application #{number}");
        }
        Command::Remove { number } => {
            let record = store
                .delete(position(number)?)
                .wrap_err("Failed to remove application")?;

            println!(
                "Removed application #{number} ({} - {})",
                record.company_name, record.job_title
            );
        }
        Command::List {
            search,
            sort,
            desc,
            page,
            last,
        } => {
            let mut view = ViewState::new(settings.page_size);
            view.set_filter(search);
            if let Some(column) = sort {
                view.sort = SortState::new(column.into(), !desc);
            }

            let rows = view.rows(store.database());
            if last {
                view.navigate(rows.len(), Navigation::Last);
            } else {
                view.page_index = page.saturating_sub(1);
            }
            let page = view.current_page(&rows);

            if page.items.is_empty() {
                println!("No applications found.");
                return Ok(());
            }

            println!(
                "{:>4}  {:<24} {:<24} {:<12} {}",
                "#", "Company", "Title", "Date", "Status"
            );
            for (index, app) in page.items {
                println!(
                    "{:>4}  {:<24} {:<24} {:<12} {}",
                    index + 1,
                    app.company_name,
                    app.job_title,
                    app.application_date.to_string(),
                    app.status
                );
            }
            println!(
                "page {}/{} ({} shown of {})",
                page.page_index + 1,
                page.total_pages,
                page.items.len(),
                rows.len()
            );
        }
        Command::Show { number } => {
            let app = store.database().get(position(number)?)?;
            print_application(number, app);
        }
        Command::Open { number, which } => {
            let app = store.database().get(position(number)?)?;
            let attachment = Attachment::from(which);

            let path = attachments::ensure_exists(attachment.path_of(app))?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn position(number: usize) -> Result<usize> {
    match number.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("Applications are numbered from 1"),
    }
}

fn print_application(number: usize, app: &ApplicationRecord) {
    println!(
        "#{number} ({}):\n\tcompany: {}\n\ttitle: {}\n\tapplied on: {}\n\tstatus: {}\n\tcover letter: {}\n\tscreenshot: {}",
        app.id,
        app.company_name,
        app.job_title,
        app.application_date,
        app.status,
        app.cover_letter_path,
        app.screenshot_path
    );

    if !app.comment.is_empty() {
        println!("\tcomment: {}", app.comment);
    }
}
