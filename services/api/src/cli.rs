use crate::demo::{run_demo, run_questions, run_score, DemoArgs, QuestionsArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use transition_compass::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Transition Compass",
    about = "Score leadership transition assessments from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect question sets and score answer files
    Assessment {
        #[command(subcommand)]
        command: AssessmentCommand,
    },
    /// Score a canned submission and print the full report
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum AssessmentCommand {
    /// Print the question set a role would receive
    Questions(QuestionsArgs),
    /// Score a JSON file of question id to option id answers
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assessment {
            command: AssessmentCommand::Questions(args),
        } => run_questions(args),
        Command::Assessment {
            command: AssessmentCommand::Score(args),
        } => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_score_command() {
        let cli = Cli::try_parse_from([
            "transition-compass-api",
            "assessment",
            "score",
            "--answers",
            "answers.json",
            "--role",
            "founder",
            "--locale",
            "es",
            "--json",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Assessment {
                command: AssessmentCommand::Score(args),
            }) => {
                assert_eq!(args.answers.to_string_lossy(), "answers.json");
                assert_eq!(args.role.as_deref(), Some("founder"));
                assert!(args.json);
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["transition-compass-api"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
