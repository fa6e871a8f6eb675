use std::io::Write;
use std::path::Path;

use clap::{Arg, ArgAction, ArgMatches};
use eyre::Context;
use gqlstruct_codegen::config::GeneratorConfigBuilder;
use gqlstruct_codegen::generate;
use gqlstruct_core::schema::SchemaDocument;

pub struct GenerateCommand;

impl GenerateCommand {
    pub fn new_cmd() -> clap::Command {
        clap::Command::new("generate")
            .about("Compiles schema documents into structs and services")
            .arg(
                Arg::new("schema")
                    .long("schema")
                    .required(true)
                    .action(ArgAction::Append)
                    .help("Schema document as JSON, can be repeated"),
            )
            .arg(Arg::new("structs-output").long("structs-output"))
            .arg(Arg::new("proto-output").long("proto-output"))
            .arg(Arg::new("registry-output").long("registry-output"))
            .arg(Arg::new("package").long("package"))
    }

    pub fn exec(arg_matches: &ArgMatches) -> eyre::Result<()> {
        let documents = arg_matches
            .get_many::<String>("schema")
            .into_iter()
            .flatten()
            .map(|path| read_document(path))
            .collect::<eyre::Result<Vec<_>>>()?;

        let mut config = GeneratorConfigBuilder::default();
        if let Some(package) = arg_matches.get_one::<String>("package") {
            config.proto_package(package);
        }
        let config = config.build()?;

        let output = generate(documents, &config)?;

        for diagnostic in &output.diagnostics {
            tracing::warn!(
                type_name = diagnostic.type_name.as_str(),
                field = diagnostic.field.as_deref(),
                "{}",
                diagnostic.message
            );
        }

        write_output(arg_matches.get_one::<String>("structs-output"), &output.structs)?;
        write_output(arg_matches.get_one::<String>("proto-output"), &output.services)?;

        if let Some(path) = arg_matches.get_one::<String>("registry-output") {
            write_output(Some(path), &output.registry_json()?)?;
        }

        Ok(())
    }
}

fn read_document(path: &str) -> eyre::Result<SchemaDocument> {
    let input = std::fs::read_to_string(path).with_context(|| format!("could not read {path}"))?;
    SchemaDocument::from_json(&input).with_context(|| format!("could not parse {path}"))
}

fn write_output(path: Option<&String>, contents: &str) -> eyre::Result<()> {
    if let Some(output) = path {
        let mut file = std::fs::File::create(Path::new(output))
            .with_context(|| format!("could not create {output}"))?;
        file.write_all(contents.as_bytes())?;
        tracing::info!(path = output.as_str(), "wrote output");
    } else {
        println!("{}", contents);
    }

    Ok(())
}
