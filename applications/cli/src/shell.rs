/// Interactive page: select forms and submit them line by line
use crate::surface::TerminalSurface;
use anyhow::{anyhow, bail};
use ppp_forms::{FormController, FormData, FormId, FORM_TABLE};
use std::io::{self, Write};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinSet};

const HELP: &str = "\
Commands:
  forms                          list forms and the requests they send
  select <form>                  show a form section
  submit [<form>] name=value...  submit a form (defaults to the selected one)
  help                           show this help
  quit                           leave the shell

Values cannot contain spaces.";

#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    Forms,
    Help,
    Quit,
    Select(FormId),
    /// `None` submits whichever form is selected
    Submit(Option<FormId>, FormData),
}

pub fn parse_line(line: &str) -> anyhow::Result<ShellCommand> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(ShellCommand::Empty);
    };

    match command {
        "forms" => Ok(ShellCommand::Forms),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        "select" => {
            let value = words
                .next()
                .ok_or_else(|| anyhow!("select needs a form id"))?;
            Ok(ShellCommand::Select(value.parse::<FormId>()?))
        }
        "submit" => {
            let rest: Vec<&str> = words.collect();
            let (form, fields) = match rest.split_first() {
                Some((first, fields)) if !first.contains('=') => {
                    (Some(first.parse::<FormId>()?), fields)
                }
                _ => (None, rest.as_slice()),
            };
            Ok(ShellCommand::Submit(form, FormData::parse_pairs(fields)?))
        }
        other => bail!("Unknown command {:?}, try `help`", other),
    }
}

/// Print each form with the request it sends and where its output goes.
pub fn print_forms() {
    for (form, operation) in FORM_TABLE {
        println!(
            "{:<30} {:<6} {:<26} -> {}",
            form.as_str(),
            operation.method().as_str(),
            operation.template(),
            form.output_id()
        );
    }
}

fn prompt<W: Write + Send>(surface: &TerminalSurface<W>) {
    let label = surface.visible().map_or("ppp", FormId::as_str);
    print!("{}> ", label);
    let _ = io::stdout().flush();
}

fn report(joined: Result<(), JoinError>) {
    if let Err(e) = joined {
        tracing::error!(error = %e, "Submission task did not complete");
    }
}

/// Run the shell on stdin until `quit` or end of input.
pub async fn run<W>(
    controller: Arc<FormController<TerminalSurface<W>>>,
    surface: Arc<TerminalSurface<W>>,
) -> anyhow::Result<()>
where
    W: Write + Send + 'static,
{
    run_lines(controller, surface, BufReader::new(tokio::io::stdin())).await
}

/// Run the shell over `input`.
///
/// Submissions run as separate tasks, so a slow request does not block the
/// next line; each result appears under its output label when it arrives.
/// Submissions still in flight at `quit` or end of input are awaited before
/// returning.
pub async fn run_lines<R, W>(
    controller: Arc<FormController<TerminalSurface<W>>>,
    surface: Arc<TerminalSurface<W>>,
    input: R,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send + 'static,
{
    let mut lines = input.lines();
    let mut pending = JoinSet::new();

    println!("{}", HELP);
    prompt(&surface);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_line(&line) {
                    Ok(ShellCommand::Empty) => {}
                    Ok(ShellCommand::Quit) => break,
                    Ok(ShellCommand::Help) => println!("{}", HELP),
                    Ok(ShellCommand::Forms) => print_forms(),
                    Ok(ShellCommand::Select(form)) => controller.select(form),
                    Ok(ShellCommand::Submit(form, data)) => {
                        match form.or_else(|| surface.visible()) {
                            Some(form) => {
                                let controller = Arc::clone(&controller);
                                pending.spawn(async move {
                                    if let Err(e) = controller.submit(form, &data).await {
                                        tracing::error!(form = %form, error = %e, "Submission failed");
                                    }
                                });
                            }
                            None => eprintln!("No form selected, use `select <form>` first"),
                        }
                    }
                    Err(e) => eprintln!("{}", e),
                }
                prompt(&surface);
            }
            Some(joined) = pending.join_next(), if !pending.is_empty() => report(joined),
        }
    }

    if !pending.is_empty() {
        tracing::debug!(pending = pending.len(), "Waiting for submissions in flight");
    }
    while let Some(joined) = pending.join_next().await {
        report(joined);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ppp_client::{ClientConfig, PppClient};
    use ppp_forms::ControllerSettings;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn shell_output(base_url: &str, input: &[u8]) -> String {
        let client = Arc::new(PppClient::new(ClientConfig::new(base_url)).unwrap());
        let surface = Arc::new(TerminalSurface::new(Vec::new()));
        let mut controller =
            FormController::new(client, Arc::clone(&surface), ControllerSettings::default());
        controller.setup();

        run_lines(Arc::new(controller), Arc::clone(&surface), input)
            .await
            .unwrap();

        let surface = Arc::try_unwrap(surface)
            .ok()
            .expect("shell should release the page when it returns");
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[tokio::test]
    async fn test_slow_submission_is_rendered_after_end_of_input() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{ "userId": 1, "username": "a" }]))
                    .set_delay(Duration::from_millis(300)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let written = shell_output(&mock_server.uri(), b"submit getAllUsers\n").await;

        assert!(written.starts_with("[getAllUsersResp]\n"));
        assert!(written.contains("\"username\": \"a\""));
    }

    #[tokio::test]
    async fn test_quit_waits_for_submissions_and_skips_later_lines() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/albums/4"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("Deleted album 4")
                    .set_delay(Duration::from_millis(200)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/albums"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&mock_server)
            .await;

        let input = b"select deleteAlbum\nsubmit albumId=4\nquit\nsubmit getAllAlbums\n";
        let written = shell_output(&mock_server.uri(), input).await;

        assert!(written.starts_with("[deleteAlbumResp]\n"));
        assert!(written.contains("Deleted album 4"));
        assert!(!written.contains("getAllAlbumsResp"));
    }

    #[test]
    fn test_parse_select() {
        assert_eq!(
            parse_line("select addAlbum").unwrap(),
            ShellCommand::Select(FormId::AddAlbum)
        );
        assert!(parse_line("select").is_err());
        assert!(parse_line("select nope").is_err());
    }

    #[test]
    fn test_parse_submit_with_form() {
        let command = parse_line("submit addUser username=foo password=bar").unwrap();
        assert_eq!(
            command,
            ShellCommand::Submit(
                Some(FormId::AddUser),
                FormData::new().with("username", "foo").with("password", "bar")
            )
        );
    }

    #[test]
    fn test_parse_submit_selected_form() {
        assert_eq!(
            parse_line("  submit   userId=4 ").unwrap(),
            ShellCommand::Submit(None, FormData::new().with("userId", "4"))
        );
        assert_eq!(
            parse_line("submit").unwrap(),
            ShellCommand::Submit(None, FormData::new())
        );
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_line("   ").unwrap(), ShellCommand::Empty);
        assert_eq!(parse_line("exit").unwrap(), ShellCommand::Quit);
        assert!(parse_line("dance").is_err());
        assert!(parse_line("submit addUser nonsense").is_err());
    }
}
