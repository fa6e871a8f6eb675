use gqlstruct_codegen::STRUCT_DIRECTIVE_TYPEDEF;

pub struct DirectiveCommand;

impl DirectiveCommand {
    pub fn new_cmd() -> clap::Command {
        clap::Command::new("directive")
            .about("Prints the @struct directive definition to register with the schema")
    }

    pub fn exec() -> eyre::Result<()> {
        println!("{}", STRUCT_DIRECTIVE_TYPEDEF);
        Ok(())
    }
}
