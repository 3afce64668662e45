use clap::{Args, Parser, Subcommand};

/// `tempfeel` - ask the comfort model how your outfit will feel.
#[derive(Parser, Debug)]
#[command(name = "tempfeel")]
#[command(version)]
#[command(about = "Thermal-comfort predictions for your clothing and conditions.", long_about = None)]
pub struct Cli {
    /// Prediction service base URL (overrides config and TEMPFEEL_API_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Log more detail (-v for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict how the given clothing will feel
    Feels {
        #[command(flatten)]
        conditions: ConditionArgs,

        /// Garment worn (repeatable, e.g. --garment t_poly --garment p_thin)
        #[arg(short, long = "garment", value_name = "ID")]
        garments: Vec<String>,
    },

    /// Recommend one upper and one lower garment for the conditions
    Clothing {
        #[command(flatten)]
        conditions: ConditionArgs,

        /// Sensation you want to end up with (cold, cool, warm, hot)
        #[arg(long)]
        feels: Option<String>,
    },

    /// List the garment table
    Catalog,
}

#[derive(Args, Debug, Default)]
pub struct ConditionArgs {
    /// Air temperature in °C
    #[arg(short, long, allow_negative_numbers = true, value_parser = parse_temperature)]
    pub temp: Option<f64>,

    /// Heart rate in BPM
    #[arg(long)]
    pub hr: Option<u16>,

    /// Sunny
    #[arg(long)]
    pub sun: bool,

    /// Riding or walking into a headwind
    #[arg(long)]
    pub headwind: bool,

    /// Feeling fatigued
    #[arg(long)]
    pub fatigued: bool,

    /// Snow intensity (none, light, medium, heavy)
    #[arg(long)]
    pub snow: Option<String>,

    /// Rain intensity (none, light, medium, heavy)
    #[arg(long)]
    pub rain: Option<String>,
}

fn parse_temperature(raw: &str) -> Result<f64, String> {
    let temp: f64 = raw.parse().map_err(|_| format!("`{raw}` is not a number"))?;
    if temp.is_finite() {
        Ok(temp)
    } else {
        Err(format!("`{raw}` is not a finite temperature"))
    }
}
