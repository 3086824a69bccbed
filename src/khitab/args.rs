use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "khitab")]
#[command(version)]
#[command(about = "Draft, review, and track Arabic business letters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draft a letter from the seven request fields
    #[command(alias = "d")]
    Draft {
        /// Letter type (e.g. جديد, رد, متابعة, تعاون)
        #[arg(long = "type")]
        letter_type: String,

        /// Letter category; picks the closing clause (e.g. طلب)
        #[arg(long)]
        category: String,

        /// What the letter is about, in a short phrase
        #[arg(long)]
        purpose: String,

        /// "نعم" for a first correspondence with this recipient
        #[arg(long)]
        first: String,

        /// Recipient of the letter
        #[arg(long)]
        recipient: String,

        /// Subject line
        #[arg(long)]
        subject: String,

        /// Drafted content, inserted verbatim into the body
        #[arg(long)]
        content: String,

        /// formal, semi-formal, or friendly
        #[arg(long, default_value = "formal")]
        tone: String,

        /// Save the generated letter as a record (requires --template)
        #[arg(long)]
        save: bool,

        /// Visual template to save with
        #[arg(long)]
        template: Option<String>,
    },

    /// List letter records, newest first
    #[command(alias = "ls")]
    List {
        /// Substring match against id and recipient
        #[arg(short, long)]
        search: Option<String>,

        /// Exact Arabic letter type (e.g. جديد)
        #[arg(long = "type")]
        letter_type: Option<String>,

        /// Exact review badge label (e.g. تمت المراجعة)
        #[arg(long)]
        review_status: Option<String>,

        /// Exact send badge label (e.g. في الانتظار)
        #[arg(long)]
        send_status: Option<String>,
    },

    /// Show one letter with its review state
    Show {
        /// Letter id (LTR-...)
        id: String,
    },

    /// Approve a letter or send it back for improvements
    Review {
        /// Letter id (LTR-...)
        id: String,

        /// Mark the letter approved
        #[arg(long, conflicts_with = "needs_improvement")]
        approve: bool,

        /// Send the letter back with notes
        #[arg(long)]
        needs_improvement: bool,

        /// Reviewer name
        #[arg(long, default_value = "")]
        reviewer: String,

        /// Review notes; required with --needs-improvement
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Delete a record by id
    #[command(alias = "rm")]
    Delete {
        /// Letter id (LTR-...)
        id: String,
    },

    /// Print the PDF download link for a letter
    Export {
        /// Letter id (LTR-...)
        id: String,
    },

    /// Print the print-view link for a letter
    Print {
        /// Letter id (LTR-...)
        id: String,
    },

    /// Show the drafting-form vocabularies
    Options,

    /// Get or set configuration
    Config {
        /// Configuration key (api-base-url, spreadsheet-id, sheets-api-key)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Show or set the color theme
    Theme {
        /// light or dark (if omitted, prints the effective theme)
        value: Option<String>,
    },
}
