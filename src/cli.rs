// image-optimizer/src/cli.rs
use crate::core::{ImageToolError, OptimizationProfile, ProcessingRequest, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "image-optimizer")]
#[command(about = "Optimiert Bilder für Web, Apps und Vorschaubilder")]
#[command(version)]
pub struct Cli {
    /// Pfad zur Datei oder zum Ordner mit Bildern
    #[arg(long)]
    pub path: PathBuf,

    /// Typ der Optimierung
    #[arg(long = "type", value_enum, default_value_t = Profile::Web)]
    pub profile: Profile,

    /// Maximale Höhe/Breite in Pixeln (0 = keine Größenänderung)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub size: i64,

    /// Ausgabeverzeichnis (Standard: optimized/ im Quellverzeichnis)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Originaldateien überschreiben
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub overwrite: bool,

    /// Ausführliche Protokollierung
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    Web,
    App,
    Bw,
    Thumbnail,
    Sepia,
    Invert,
}

impl From<Profile> for OptimizationProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Web => OptimizationProfile::Web,
            Profile::App => OptimizationProfile::App,
            Profile::Bw => OptimizationProfile::Bw,
            Profile::Thumbnail => OptimizationProfile::Thumbnail,
            Profile::Sepia => OptimizationProfile::Sepia,
            Profile::Invert => OptimizationProfile::Invert,
        }
    }
}

impl Cli {
    pub fn into_request(self) -> Result<ProcessingRequest> {
        let max_dimension = u32::try_from(self.size).map_err(|_| {
            if self.size < 0 {
                ImageToolError::Validation("--size muss größer oder gleich 0 sein".to_string())
            } else {
                ImageToolError::Validation(format!("--size ist zu groß: {}", self.size))
            }
        })?;

        let request = ProcessingRequest {
            source_path: self.path,
            output_directory: self.output,
            max_dimension,
            profile: self.profile.into(),
            overwrite_in_place: self.overwrite,
        };
        request.validate()?;

        Ok(request)
    }
}
