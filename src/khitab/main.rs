use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use khitab::api::{CmdMessage, ConfigAction, ExportKind, KhitabApi, KhitabPaths, MessageLevel};
use khitab::config::KhitabConfig;
use khitab::error::{KhitabError, Result};
use khitab::filter::{RecordFilter, RecordRow};
use khitab::model::{LetterRequest, ReviewStatus, SendStatus};
use khitab::review::{ReviewAction, ReviewLog};
use khitab::service::LetterService;
use khitab::store::sheets::SheetsStore;
use khitab::template::Tone;
use khitab::theme::{self, Theme};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: KhitabApi<SheetsStore>,
    theme: Theme,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Commands::Draft {
            letter_type,
            category,
            purpose,
            first,
            recipient,
            subject,
            content,
            tone,
            save,
            template,
        } => {
            let request = LetterRequest {
                letter_type,
                letter_category: category,
                letter_purpose: purpose,
                first_correspondence: first,
                recipient,
                subject,
                content,
            };
            handle_draft(&mut ctx, &request, &tone, save, template)
        }
        Commands::List {
            search,
            letter_type,
            review_status,
            send_status,
        } => {
            let filter = RecordFilter {
                search,
                letter_type,
                review_status,
                send_status,
            };
            handle_list(&ctx, &filter)
        }
        Commands::Show { id } => handle_show(&ctx, &id),
        Commands::Review {
            id,
            approve,
            needs_improvement,
            reviewer,
            notes,
        } => handle_review(&ctx, &id, approve, needs_improvement, &reviewer, &notes),
        Commands::Delete { id } => handle_delete(&mut ctx, &id),
        Commands::Export { id } => handle_export(&ctx, &id, ExportKind::Download),
        Commands::Print { id } => handle_export(&ctx, &id, ExportKind::Print),
        Commands::Options => handle_options(&ctx),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
        Commands::Theme { value } => handle_theme(&ctx, value),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var("KHITAB_HOME") {
        Ok(home) => PathBuf::from(home),
        Err(_) => ProjectDirs::from("com", "khitab", "khitab")
            .expect("Could not determine data dir")
            .data_dir()
            .to_path_buf(),
    };

    let config = KhitabConfig::load(&data_dir).unwrap_or_default();
    let theme = theme::effective(config.theme);

    let service = LetterService::new(config.api_base_url.clone());
    let store = SheetsStore::new(&config.spreadsheet_id, &config.sheets_api_key);
    let reviews = ReviewLog::new(&data_dir);
    let paths = KhitabPaths { data_dir };

    Ok(AppContext {
        api: KhitabApi::new(store, service, reviews, paths),
        theme,
    })
}

fn handle_draft(
    ctx: &mut AppContext,
    request: &LetterRequest,
    tone: &str,
    save: bool,
    template: Option<String>,
) -> Result<()> {
    let tone: Tone = tone.parse().map_err(KhitabError::Api)?;
    let save_with_template = if save {
        Some(template.unwrap_or_default())
    } else {
        None
    };

    let result = ctx
        .api
        .draft(request, tone, save_with_template.as_deref())?;

    if let Some(letter) = &result.letter {
        println!("{}", letter);
        println!();
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, filter: &RecordFilter) -> Result<()> {
    let result = ctx.api.list_records(filter)?;
    print_rows(&result.rows, ctx.theme);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.show_letter(id)?;

    if let Some(row) = result.rows.first() {
        print_letter_card(row, ctx.theme);
    } else if let Some(letter) = &result.letter {
        println!("{}", letter);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_review(
    ctx: &AppContext,
    id: &str,
    approve: bool,
    needs_improvement: bool,
    reviewer: &str,
    notes: &str,
) -> Result<()> {
    let action = if approve {
        ReviewAction::Approve
    } else if needs_improvement {
        ReviewAction::NeedsImprovement
    } else {
        return Err(KhitabError::Api(
            "Choose --approve or --needs-improvement".to_string(),
        ));
    };

    let result = ctx.api.review_letter(id, action, reviewer, notes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_record(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, id: &str, kind: ExportKind) -> Result<()> {
    let result = ctx.api.export_letter(id, kind)?;
    print_messages(&result.messages);
    for url in &result.urls {
        println!("{}", url);
    }
    Ok(())
}

fn handle_options(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.options()?;
    if let Some(options) = &result.options {
        print_option_group("Letter types", &options.letter_types);
        print_option_group("Categories", &options.letter_categories);
        print_option_group("Purposes", &options.letter_purposes);
        print_option_group("Templates", &options.templates);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("api-base-url = {}", config.api_base_url);
        println!("spreadsheet-id = {}", config.spreadsheet_id);
        println!("sheets-api-key = {}", config.sheets_api_key);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_theme(ctx: &AppContext, value: Option<String>) -> Result<()> {
    let set = match value {
        Some(value) => Some(value.parse::<Theme>().map_err(KhitabError::Api)?),
        None => None,
    };

    let result = ctx.api.theme(set)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const ID_WIDTH: usize = 26;
const DATE_WIDTH: usize = 28;
const TYPE_WIDTH: usize = 10;
const SUBJECT_WIDTH: usize = 26;

fn print_rows(rows: &[RecordRow], theme: Theme) {
    if rows.is_empty() {
        println!("No records found.");
        return;
    }

    for row in rows {
        let review_badge = review_badge(row.review_status(), theme);
        let send_badge = send_badge(row.send_status, theme);

        println!(
            "{}  {}  {}  {}  {}  {}  {}",
            pad_to_width(&row.record.id, ID_WIDTH),
            pad_to_width(&row.record.date, DATE_WIDTH).dimmed(),
            pad_to_width(row.display_type(), TYPE_WIDTH),
            pad_to_width(&row.record.subject, SUBJECT_WIDTH),
            send_badge,
            review_badge,
            row.record.recipient
        );
    }
}

fn print_letter_card(row: &RecordRow, theme: Theme) {
    println!(
        "{} {}",
        row.record.id.yellow(),
        row.record.subject.bold()
    );
    println!("--------------------------------");
    println!("{}", row.record.content);
    println!("--------------------------------");
    println!(
        "{}  {}  {}",
        send_badge(row.send_status, theme),
        review_badge(row.review_status(), theme),
        row.record.date.dimmed()
    );
    if let Some(review) = &row.review {
        let age = review_age(&review.review_date)
            .map(|age| format!(" ({})", age))
            .unwrap_or_default();
        println!("Reviewed by {}{}", review.reviewer, age.dimmed());
        if !review.notes.is_empty() {
            println!("Notes: {}", review.notes);
        }
    }
}

fn review_badge(status: ReviewStatus, theme: Theme) -> ColoredString {
    let label = format!("[{}]", status.label());
    match (status, theme) {
        (ReviewStatus::Approved, Theme::Dark) => label.bright_green(),
        (ReviewStatus::Approved, Theme::Light) => label.green(),
        (ReviewStatus::NeedsImprovement, Theme::Dark) => label.bright_yellow(),
        (ReviewStatus::NeedsImprovement, Theme::Light) => label.yellow(),
        (ReviewStatus::Pending, _) => label.dimmed(),
    }
}

fn send_badge(status: SendStatus, theme: Theme) -> ColoredString {
    let label = format!("[{}]", status.label());
    match (status, theme) {
        (SendStatus::Sent, Theme::Dark) => label.bright_cyan(),
        (SendStatus::Sent, Theme::Light) => label.cyan(),
        (SendStatus::Pending, _) => label.dimmed(),
    }
}

fn print_option_group(header: &str, values: &[String]) {
    println!("{}", header.bold());
    for value in values {
        println!("  {}", value);
    }
    println!();
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn review_age(review_date: &str) -> Option<String> {
    let reviewed_at: DateTime<Utc> = DateTime::parse_from_rfc3339(review_date)
        .ok()?
        .with_timezone(&Utc);
    let duration = Utc::now().signed_duration_since(reviewed_at);
    let formatter = timeago::Formatter::new();
    Some(formatter.convert(duration.to_std().unwrap_or_default()))
}
