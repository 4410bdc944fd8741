//! Interactive chat loop: the presentation layer.
//!
//! Plain input is submitted as a user turn; `/`-prefixed input is a
//! command. Rejections (busy session, bad index, bad values) print a
//! status line without touching the conversation.

use std::io::Write as _;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

use sehat_ai::{
    CompletionClient, Language, Role, Session, SessionError, VoiceError, VoiceInput,
    WhisperConfig, WhisperVoice,
};
use sehat_config::SehatConfig;

use crate::audio::FileUtteranceSource;

/// Commands understood by the chat loop.
#[derive(Debug, PartialEq)]
enum Command {
    Clear,
    Restore(usize),
    History,
    Lang(String),
    Temp(f64),
    Voice(String),
    Help,
    Quit,
    /// Unparseable or unknown; carries the status line to print.
    Invalid(String),
}

/// Parse a `/`-prefixed command; `None` means plain chat input.
fn parse_command(line: &str) -> Option<Command> {
    let rest = line.trim().strip_prefix('/')?;
    let mut parts = rest.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or("");
    let arg = parts.next().map(str::trim).unwrap_or("");

    let cmd = match name {
        "clear" => Command::Clear,
        "restore" => match arg.parse::<usize>() {
            Ok(index) => Command::Restore(index),
            Err(_) => Command::Invalid("usage: /restore <index>".into()),
        },
        "history" => Command::History,
        "lang" if !arg.is_empty() => Command::Lang(arg.to_string()),
        "lang" => Command::Invalid("usage: /lang <language>".into()),
        "temp" => match arg.parse::<f64>() {
            Ok(value) if (0.0..=1.0).contains(&value) => Command::Temp(value),
            _ => Command::Invalid("usage: /temp <0.0-1.0>".into()),
        },
        "voice" if !arg.is_empty() => Command::Voice(arg.to_string()),
        "voice" => Command::Invalid("usage: /voice <wav-file>".into()),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Invalid(format!("unknown command: /{other} (try /help)")),
    };
    Some(cmd)
}

fn print_help() {
    println!("  /clear            archive this conversation and start fresh");
    println!("  /restore <n>      bring back archived conversation n");
    println!("  /history          list archived conversations");
    println!("  /lang <name>      set the response language");
    println!("  /temp <0.0-1.0>   set the sampling temperature");
    println!("  /voice <file>     transcribe a WAV file and submit it");
    println!("  /quit             exit");
}

fn print_history(session: &Session) {
    if session.archive().is_empty() {
        println!("(no archived conversations)");
        return;
    }
    for (i, conversation) in session.archive().iter().enumerate() {
        let title = conversation
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .unwrap_or("(empty)");
        println!("  [{i}] {} messages: {title}", conversation.len());
    }
}

/// Replay a conversation the way the original exchange looked.
/// System messages are never shown.
fn print_conversation(session: &Session) {
    for message in session.messages() {
        match message.role {
            Role::System => {}
            Role::User => println!("you> {}", message.content),
            Role::Assistant => println!("sehat> {}", message.content),
        }
    }
}

async fn submit(session: &mut Session, client: &dyn CompletionClient, text: &str) {
    match session.submit_user_turn(client, text).await {
        Ok(Some(reply)) => println!("sehat> {reply}"),
        Ok(None) => {} // empty input, nothing to do
        Err(SessionError::Busy) => println!("(still thinking, wait for the current reply)"),
        Err(e) => println!("({e})"),
    }
}

/// Transcribe a pre-recorded utterance. The transcription service uses
/// its own credential, separate from the completion key.
async fn transcribe_file(
    path: &str,
    config: &SehatConfig,
    language: Language,
) -> Result<String, VoiceError> {
    if !config.voice.enabled {
        return Err(VoiceError::Other(
            "voice input is disabled in the config".into(),
        ));
    }
    let api_key = std::env::var("OPENAI_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| VoiceError::ServiceUnavailable("OPENAI_API_KEY is not set".into()))?;

    let voice = WhisperVoice::new(
        WhisperConfig::new(api_key)
            .with_model(config.voice.model.clone())
            .with_capture_timeout(Duration::from_secs(config.voice.capture_timeout_secs)),
        Box::new(FileUtteranceSource::new(path)),
    );
    voice.transcribe_once(language).await
}

pub async fn run(
    mut session: Session,
    client: impl CompletionClient,
    config: &SehatConfig,
) -> sehat_common::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    // Show the seeded greeting
    if let Some(greeting) = session
        .messages()
        .iter()
        .find(|m| m.role == Role::Assistant)
    {
        println!("sehat> {}", greeting.content);
    }
    println!("(type /help for commands)");

    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Help) => print_help(),
            Some(Command::Clear) => match session.clear_conversation() {
                Ok(()) => println!(
                    "(conversation archived, {} in history)",
                    session.archive().len()
                ),
                Err(e) => println!("({e})"),
            },
            Some(Command::Restore(index)) => match session.restore_conversation(index) {
                Ok(()) => {
                    println!("(restored conversation {index})");
                    print_conversation(&session);
                }
                Err(e) => println!("({e})"),
            },
            Some(Command::History) => print_history(&session),
            Some(Command::Lang(name)) => {
                let mut settings = session.settings();
                settings.language = Language::from_name(&name);
                session.update_settings(settings);
                println!("(replying in {} from the next message)", settings.language);
            }
            Some(Command::Temp(value)) => {
                let mut settings = session.settings();
                settings.temperature = value;
                session.update_settings(settings);
                println!("(temperature set to {value})");
            }
            Some(Command::Voice(path)) => {
                match transcribe_file(&path, config, session.settings().language).await {
                    Ok(text) => {
                        println!("you (voice)> {text}");
                        submit(&mut session, &client, &text).await;
                    }
                    Err(e) => println!("(voice input failed: {e})"),
                }
            }
            Some(Command::Invalid(msg)) => println!("({msg})"),
            None => submit(&mut session, &client, &line).await,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_not_a_command() {
        assert_eq!(parse_command("what helps for fever?"), None);
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn commands_parse() {
        assert_eq!(parse_command("/clear"), Some(Command::Clear));
        assert_eq!(parse_command("/restore 2"), Some(Command::Restore(2)));
        assert_eq!(parse_command("/history"), Some(Command::History));
        assert_eq!(
            parse_command("/lang Hindi"),
            Some(Command::Lang("Hindi".into()))
        );
        assert_eq!(parse_command("/temp 0.7"), Some(Command::Temp(0.7)));
        assert_eq!(
            parse_command("/voice note.wav"),
            Some(Command::Voice("note.wav".into()))
        );
        assert_eq!(parse_command("/quit"), Some(Command::Quit));
        assert_eq!(parse_command("/exit"), Some(Command::Quit));
    }

    #[test]
    fn bad_arguments_become_status_lines() {
        assert!(matches!(
            parse_command("/restore two"),
            Some(Command::Invalid(_))
        ));
        assert!(matches!(
            parse_command("/temp 1.5"),
            Some(Command::Invalid(_))
        ));
        assert!(matches!(parse_command("/lang"), Some(Command::Invalid(_))));
        assert!(matches!(
            parse_command("/frobnicate"),
            Some(Command::Invalid(_))
        ));
    }
}
