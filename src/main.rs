use anyhow::{Context, anyhow};
use chatopts::{AnyOption, ChoiceableOption, CommandOption, OptionType};
use clap::Parser;
use serde_json::json;
use tracing::Level;

/// Builds one option from the command line and checks tokens against it.
#[derive(Parser, Debug)]
#[command(name = "chatopts", version)]
struct Args {
    /// boolean, number, string, member, channel or role
    option_type: OptionType,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// NAME=VALUE, repeatable (string and number options only)
    #[arg(long = "choice", value_name = "NAME=VALUE")]
    choices: Vec<String>,

    #[arg(short, long)]
    verbose: bool,

    /// tokens to validate
    tokens: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let option = build_option(&args)?;
    let fragment = option.build_regex_string();
    let results = args
        .tokens
        .iter()
        .map(|token| json!({ "token": token, "value": option.validate(token) }))
        .collect::<Vec<_>>();

    tracing::info!(
        option = option.name(),
        accepted = results.iter().filter(|result| !result["value"].is_null()).count(),
        total = results.len(),
        "validated tokens"
    );

    let report = json!({
        "option": option,
        "fragment": fragment,
        "results": results,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn build_option(args: &Args) -> anyhow::Result<AnyOption> {
    let choices = args
        .choices
        .iter()
        .map(|choice| {
            choice
                .split_once('=')
                .ok_or(anyhow!("choice `{choice}` is not NAME=VALUE"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if !choices.is_empty() && !args.option_type.is_choiceable() {
        return Err(anyhow!("{} options do not take choices", args.option_type));
    }

    let mut option = AnyOption::new(args.option_type);
    option = match option {
        AnyOption::String(string) if !choices.is_empty() => string.add_choice(choices)?.into(),
        AnyOption::Number(number) if !choices.is_empty() => {
            let choices = choices
                .into_iter()
                .map(|(name, value)| {
                    value
                        .parse::<i64>()
                        .map(|value| (name, value))
                        .with_context(|| format!("choice `{name}` needs an integer value"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            number.add_choice(choices)?.into()
        }
        other => other,
    };

    if let Some(name) = &args.name {
        option = rename(option, name)?;
    }
    if let Some(description) = &args.description {
        option = describe(option, description)?;
    }
    Ok(option)
}

fn rename(option: AnyOption, name: &str) -> chatopts::Result<AnyOption> {
    Ok(match option {
        AnyOption::Boolean(option) => option.set_name(name)?.into(),
        AnyOption::Number(option) => option.set_name(name)?.into(),
        AnyOption::String(option) => option.set_name(name)?.into(),
        AnyOption::Member(option) => option.set_name(name)?.into(),
        AnyOption::Channel(option) => option.set_name(name)?.into(),
        AnyOption::Role(option) => option.set_name(name)?.into(),
    })
}

fn describe(option: AnyOption, description: &str) -> chatopts::Result<AnyOption> {
    Ok(match option {
        AnyOption::Boolean(option) => option.set_description(description)?.into(),
        AnyOption::Number(option) => option.set_description(description)?.into(),
        AnyOption::String(option) => option.set_description(description)?.into(),
        AnyOption::Member(option) => option.set_description(description)?.into(),
        AnyOption::Channel(option) => option.set_description(description)?.into(),
        AnyOption::Role(option) => option.set_description(description)?.into(),
    })
}
