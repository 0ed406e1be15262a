use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for tankerlog
/// CLI application to log branch shifts and tanker records with SQLite
#[derive(Parser)]
#[command(
    name = "tankerlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log branch shifts and browse tanker and bunker records stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database, the configuration and the sample records
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log in with one of the built-in accounts
    Login { username: String, password: String },

    /// Log out and wipe the local session (in-progress shift included)
    Logout,

    /// Show the current session
    Whoami,

    /// Manage the branch scope of this device
    Branch {
        #[command(subcommand)]
        action: BranchAction,
    },

    /// Show the dashboard cards for the current role
    Dashboard,

    /// Start, end or inspect the current shift (branch users)
    Shift {
        #[command(subcommand)]
        action: ShiftAction,
    },

    /// Browse, view, edit and add tanker records
    Tanker {
        #[command(subcommand)]
        action: TankerAction,
    },

    /// Browse bunker records (admins)
    Bunker {
        #[command(subcommand)]
        action: BunkerAction,
    },
}

#[derive(Subcommand)]
pub enum BranchAction {
    /// Set the branch whose records a branch user can see
    Set { name: String },

    /// Print the branch scope in use
    Show,
}

#[derive(Subcommand)]
pub enum ShiftAction {
    /// Start a shift: employee name plus a photo
    Start {
        #[arg(long = "name", help = "Employee name (required)", default_value = "")]
        name: String,

        #[arg(long = "image", value_name = "FILE", help = "Photo taken at shift start")]
        image: Option<String>,
    },

    /// End the current shift
    End,

    /// Show the current shift
    Status,
}

#[derive(Subcommand)]
pub enum TankerAction {
    /// List tanker records, one page at a time
    List {
        #[arg(long = "date", help = "Only records of this day (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "page", short = 'p', default_value_t = 1)]
        page: usize,

        #[arg(long = "json", help = "Print the page as JSON")]
        json: bool,
    },

    /// Show every field of one record
    View {
        id: String,

        #[arg(long = "json")]
        json: bool,
    },

    /// Edit a record in place (admins)
    Edit {
        id: String,

        #[command(flatten)]
        fields: TankerFieldArgs,

        #[arg(
            long = "set",
            value_name = "FIELD=VALUE",
            help = "Set any field by key, e.g. --set owner-name=Ravi"
        )]
        set: Vec<String>,
    },

    /// Add a new record
    Add {
        #[command(flatten)]
        fields: TankerFieldArgs,
    },
}

/// One optional flag per editable tanker field.
#[derive(Args, Debug, Default)]
pub struct TankerFieldArgs {
    #[arg(long = "tanker-number")]
    pub tanker_number: Option<String>,

    #[arg(long = "owner-name")]
    pub owner_name: Option<String>,

    #[arg(long = "capacity")]
    pub capacity: Option<String>,

    #[arg(long = "date-time", help = "YYYY-MM-DD HH:MM")]
    pub date_time: Option<String>,

    #[arg(long = "receipt-number")]
    pub receipt_number: Option<String>,

    #[arg(long = "voucher-amount")]
    pub voucher_amount: Option<String>,

    #[arg(long = "receipt-date", help = "YYYY-MM-DD")]
    pub receipt_date: Option<String>,

    #[arg(long = "meter-start")]
    pub meter_start: Option<String>,

    #[arg(long = "meter-end")]
    pub meter_end: Option<String>,

    #[arg(long = "voucher-photo", value_name = "FILE")]
    pub voucher_photo: Option<String>,

    #[arg(long = "tanker-photo", value_name = "FILE")]
    pub tanker_photo: Option<String>,

    #[arg(long = "branch")]
    pub branch: Option<String>,
}

#[derive(Subcommand)]
pub enum BunkerAction {
    /// List bunker records, one page at a time
    List {
        #[arg(long = "page", short = 'p', default_value_t = 1)]
        page: usize,
    },

    /// Show one bunker record
    View { id: String },
}
