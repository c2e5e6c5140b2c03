use toolrow::view::locale::{Catalog, English, Locale};
use toolrow::view::row::Control;
use toolrow::view::transport;
use toolrow::{Context, Source, Tool, render};

use futures::FutureExt;
use serde_json::json;
use std::env;
use std::fs;
use std::io;

pub fn main() -> io::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = env::args().skip(1);
    let mut tool = None;
    let mut locale = None;
    let mut context = Context::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--server" => context = context.server(args.next().unwrap_or_default()),
            "--project" => context = context.source(Source::Project),
            "--always-allow-mcp" => context = context.always_allow_mcp(true),
            "--locale" => {
                let path = args.next().unwrap_or_default();
                locale = Some(Catalog::from_json(&fs::read(path)?)?);
            }
            path => tool = Some(serde_json::from_slice::<Tool>(&fs::read(path)?)?),
        }
    }

    // Run `cargo run --example render -- --server filesystem --always-allow-mcp`
    let tool = tool.unwrap_or_else(|| {
        Tool::new("read_file")
            .description("Read the contents of a file")
            .enabled_for_prompt(true)
            .input_schema(json!({
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "File path" },
                    "encoding": { "type": "string" }
                },
                "required": ["path"]
            }))
    });

    let locale: &dyn Locale = match &locale {
        Some(catalog) => catalog,
        None => &English,
    };

    let row = render(&tool, &context, locale);
    println!("{row}");

    let (channel, mut host) = transport::channel();

    for control in [Control::PromptToggle, Control::AlwaysAllow] {
        let _ = row.click(control, &channel);
    }

    while let Some(Some(message)) = host.next().now_or_never() {
        let message = message?;

        println!("-> {}", String::from_utf8_lossy(&message.serialize()?));
    }

    Ok(())
}
