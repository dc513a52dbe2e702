use crate::commands::shared::{resolve_tag, LanguageArgs, SourceArgs};
use crate::commands::tokenize::resolve_language;
use crate::core::source::read_source;
use crate::debug_log;
use clap::Args;
use hl_lib::render_code_block;

#[derive(Debug, Args)]
#[command(about = "Render a snippet as highlighted code-block HTML")]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub language: LanguageArgs,
}

pub fn execute(args: &RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let code = read_source(&args.source.source)?;
    let tag = resolve_tag(args.language.language.as_deref(), &args.source.source);
    resolve_language(&tag);

    let html = render_code_block(&code, &tag);
    debug_log!("Rendered {} bytes of markup", html.len());
    println!("{html}");

    Ok(())
}
