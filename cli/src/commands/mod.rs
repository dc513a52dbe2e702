pub mod languages;
pub mod render;
pub mod shared;
pub mod tokenize;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    Tokenize(tokenize::TokenizeArgs),
    Render(render::RenderArgs),
    Languages(languages::LanguagesArgs),
}
