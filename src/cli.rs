use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the film dataset CSV
    #[arg(long, default_value = "data/film.csv")]
    pub data: String,

    /// Path to config TOML
    #[arg(long, default_value = "filmscope.toml")]
    pub config: String,

    /// Run without GUI: load the dataset, log a summary, exit
    #[arg(long, default_value_t = false)]
    pub nogui: bool,
}
