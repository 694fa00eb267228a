use crate::utils::constants::{
    DEFAULT_ALT_COLUMN, DEFAULT_LAT_COLUMN, DEFAULT_LON_COLUMN, DEFAULT_NAME_COLUMN,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "survey-tagger")]
#[command(about = "Embeds flight-log GPS coordinates into survey image EXIF metadata")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tag every image named in a flight-log CSV
    Tag {
        #[arg(short, long, help = "Folder containing the survey images")]
        image_folder: PathBuf,

        #[arg(short, long, help = "Flight-log CSV with one row per image")]
        track: PathBuf,

        #[arg(
            short,
            long,
            help = "Failure report path [default: survey-tagger-failures-{YYMMDD}.txt]"
        )]
        error_report: Option<PathBuf>,

        #[arg(
            long,
            default_value_t = DEFAULT_NAME_COLUMN,
            help = "0-based CSV column holding the image file name"
        )]
        name_column: usize,

        #[arg(
            long,
            default_value_t = DEFAULT_LAT_COLUMN,
            help = "0-based CSV column holding the latitude"
        )]
        lat_column: usize,

        #[arg(
            long,
            default_value_t = DEFAULT_LON_COLUMN,
            help = "0-based CSV column holding the longitude"
        )]
        lon_column: usize,

        #[arg(
            long,
            default_value_t = DEFAULT_ALT_COLUMN,
            help = "0-based CSV column holding the altitude"
        )]
        alt_column: usize,

        #[arg(
            long,
            default_value = "false",
            help = "Record unprocessable rows and keep going instead of aborting"
        )]
        keep_going: bool,
    },

    /// Print the raw GPS tag group stored in an image
    Inspect {
        #[arg(short, long, help = "Image file to inspect")]
        file: PathBuf,
    },
}
