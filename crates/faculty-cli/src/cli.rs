// Rust guideline compliant 2026-10-16

//! Command-line grammar of the `faculty` tool.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Top-level arguments.
#[derive(Parser, Debug)]
#[command(
    name = "faculty",
    version,
    about = "Command line interface to Faculty",
    long_about = "Manage projects, servers, environments, jobs, datasets and workspace files \
                  on the Faculty platform.",
    after_help = "Examples:\n  \
                  faculty login\n  \
                  faculty server list\n  \
                  faculty shell \"My Project\" notebook\n  \
                  faculty job run \"My Project\" train \"alpha=0.1,beta=2\"\n  \
                  faculty job logs \"My Project\" train 3.1\n  \
                  faculty datasets ls \"My Project\" --prefix /input\n"
)]
pub struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "FACULTY_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Append JSON logs to this file instead of printing them
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the version number
    Version,

    /// Write Faculty credentials to file
    Login,

    /// Print a shell completion script
    Completion {
        /// Shell to generate the script for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Manipulate Faculty projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manipulate Faculty servers
    Server {
        #[command(subcommand)]
        action: ServerAction,
    },

    /// Open a shell on a Faculty server
    ///
    /// Any additional arguments are passed on to SSH, e.g. to forward a port:
    /// faculty shell PROJECT SERVER -L 9000:localhost:8888
    Shell {
        /// Project name or ID
        project: String,

        /// Server name or ID
        server: String,

        /// Extra arguments for ssh
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        ssh_opts: Vec<String>,
    },

    /// Manipulate Faculty server environments
    Environment {
        #[command(subcommand)]
        action: EnvironmentAction,
    },

    /// Manipulate Faculty jobs
    Job {
        #[command(subcommand)]
        action: JobAction,
    },

    /// Manipulate files in a Faculty project
    File {
        #[command(subcommand)]
        action: FileAction,
    },

    /// Manipulate files in Faculty datasets
    #[command(visible_alias = "dataset")]
    Datasets {
        #[command(subcommand)]
        action: DatasetsAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProjectAction {
    /// List accessible projects
    List {
        /// Print extra information about projects
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create a new project
    New {
        /// Project name
        name: String,
    },
}

/// Output layouts of `server list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServerListFormat {
    /// One server name per line
    List,
    /// Aligned table of server details
    Table,
    /// OpenSSH client configuration entries
    SshConfig,
}

#[derive(Debug, Subcommand)]
pub enum ServerAction {
    /// List your servers, in all projects unless one is given
    List {
        /// Project name or ID
        project: Option<String>,

        /// Show all servers, not just running ones
        #[arg(short, long)]
        all: bool,

        /// Print extra information (same as --format table)
        #[arg(short, long, conflicts_with = "format")]
        verbose: bool,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<ServerListFormat>,
    },

    /// Create a new server
    New {
        /// Project name or ID
        project: String,

        /// Number of CPU cores
        #[arg(long, default_value_t = 1.0)]
        cores: f64,

        /// Server memory in GB
        #[arg(long, default_value_t = 4.0)]
        memory: f64,

        /// Server type
        #[arg(long = "type", default_value = "jupyter")]
        server_type: String,

        /// Machine type for a dedicated instance, e.g. m5.xlarge; overrides
        /// --cores and --memory
        #[arg(long)]
        machine_type: Option<String>,

        /// Server image version [advanced]
        #[arg(long)]
        version: Option<String>,

        /// Name to assign to the server
        #[arg(long)]
        name: Option<String>,

        /// Environments to apply to the server
        #[arg(long = "environment")]
        environments: Vec<String>,

        /// Wait until the server is running before exiting
        #[arg(long)]
        wait: bool,
    },

    /// Terminate a server
    Terminate {
        /// Project name or ID
        project: String,

        /// Server name or ID
        server: String,
    },

    /// Open a server in your browser
    Open {
        /// Project name or ID
        project: String,

        /// Name or ID of server to use
        #[arg(long)]
        server: Option<String>,
    },

    /// List the machine types available on dedicated infrastructure
    InstanceTypes {
        /// Print extra information about instance types
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the hostname, port and username for SSH access to a server
    SshDetails {
        /// Project name or ID
        project: String,

        /// Server name or ID
        server: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum EnvironmentAction {
    /// List the environments in a project
    List {
        /// Project name or ID
        project: String,

        /// Print extra information about environments
        #[arg(short, long)]
        verbose: bool,
    },

    /// Apply an environment to a server
    Apply {
        /// Project name or ID
        project: String,

        /// Server name or ID
        server: String,

        /// Environment name or ID
        environment: String,
    },

    /// Get the execution status of the latest environment application
    Status {
        /// Project name or ID
        project: String,

        /// Server name or ID
        server: String,
    },

    /// Stream the logs of the latest environment application
    Logs {
        /// Project name or ID
        project: String,

        /// Server name or ID
        server: String,

        /// Display only the logs of this step, counting from 0
        #[arg(short, long = "step")]
        step: Option<usize>,
    },
}

#[derive(Debug, Subcommand)]
pub enum JobAction {
    /// List the jobs in a project
    List {
        /// Project name or ID
        project: String,

        /// Print extra information about jobs
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the runs of a job
    ListRuns {
        /// Project name or ID
        project: String,

        /// Job name or ID
        job: String,

        /// Print extra information about runs
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run a job
    ///
    /// Each PARAMETER_VALUES argument starts one subrun, e.g.
    /// "foo=bar,eggs=spam". Escape ',' and '=' with a backslash.
    Run {
        /// Project name or ID
        project: String,

        /// Job name or ID
        job: String,

        /// Parameter values of each subrun
        parameter_values: Vec<String>,

        /// Number of subruns to start without parameters
        #[arg(long)]
        num_subruns: Option<usize>,
    },

    /// Print the logs of a run, e.g. RUN=3 or RUN=3.1 for a subrun
    Logs {
        /// Project name or ID
        project: String,

        /// Job name or ID
        job: String,

        /// Run number, optionally followed by '.' and a subrun number
        run: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum FileAction {
    /// Copy a local file to the project workspace
    Put {
        /// Project name or ID
        project: String,

        /// Local path
        local: String,

        /// Path on the server
        remote: String,

        /// Name or ID of server to use
        #[arg(long)]
        server: Option<String>,
    },

    /// Copy a file from the project workspace to the local machine
    Get {
        /// Project name or ID
        project: String,

        /// Path on the server
        remote: String,

        /// Local path
        local: String,

        /// Name or ID of server to use
        #[arg(long)]
        server: Option<String>,
    },

    /// Sync local files up to a project with rsync
    ///
    /// Runs "rsync -a LOCAL server:REMOTE [RSYNC_OPTS]".
    SyncUp {
        /// Project name or ID
        project: String,

        /// Local path
        local: String,

        /// Path on the server
        remote: String,

        /// Name or ID of server to use
        #[arg(long)]
        server: Option<String>,

        /// Extra arguments for rsync
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        rsync_opts: Vec<String>,
    },

    /// Sync remote files down from a project with rsync
    ///
    /// Runs "rsync -a server:REMOTE LOCAL [RSYNC_OPTS]".
    SyncDown {
        /// Project name or ID
        project: String,

        /// Path on the server
        remote: String,

        /// Local path
        local: String,

        /// Name or ID of server to use
        #[arg(long)]
        server: Option<String>,

        /// Extra arguments for rsync
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        rsync_opts: Vec<String>,
    },

    /// List files and directories in the project workspace
    Ls {
        /// Project name or ID
        project: String,

        /// Absolute path under /project
        path: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum DatasetsAction {
    /// List contents of project datasets
    Ls {
        /// Project name or ID
        project: String,

        /// List only paths in the datasets starting with this prefix
        #[arg(long, default_value = "/")]
        prefix: String,

        /// Include hidden files in the output
        #[arg(long)]
        show_hidden: bool,
    },

    /// Copy from a project's datasets to the local filesystem
    Get {
        /// Project name or ID
        project: String,

        /// Path in the datasets
        project_path: String,

        /// Local path
        local_path: String,
    },

    /// Copy from the local filesystem to a project's datasets
    Put {
        /// Project name or ID
        project: String,

        /// Local path
        local_path: String,

        /// Path in the datasets
        project_path: String,
    },

    /// Move a file within a project's datasets
    Mv {
        /// Project name or ID
        project: String,

        /// Path to move from
        source_path: String,

        /// Path to move to
        destination_path: String,
    },

    /// Copy a file within a project's datasets
    Cp {
        /// Project name or ID
        project: String,

        /// Path to copy from
        source_path: String,

        /// Path to copy to
        destination_path: String,

        /// Copy directories like a recursive copy in a filesystem
        #[arg(long)]
        recursive: bool,
    },

    /// Remove a file from a project's datasets
    Rm {
        /// Project name or ID
        project: String,

        /// Path in the datasets
        project_path: String,

        /// Delete directories like a recursive delete in a filesystem
        #[arg(long)]
        recursive: bool,
    },
}
