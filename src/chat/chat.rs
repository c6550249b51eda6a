use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use crate::chat::enums::relay_end::RelayEnd;

pub const PROMPT: &str = "> ";

/// Remote line as shown on the terminal: green text, then a fresh prompt.
pub fn format_remote_line(line: &str) -> String
{
    format!("\x1b[32m{line}\n\x1b[0m{PROMPT}")
}

/// Relays lines between `stream` and the local `input`/`output` until one side closes.
pub async fn relay<S, I, O>(stream: S, input: I, mut output: O) -> std::io::Result<RelayEnd>
where
    S: AsyncRead + AsyncWrite + Unpin,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let (reader, mut writer) = tokio::io::split(stream);
    let mut remote_lines = BufReader::new(reader).lines();
    let mut local_lines = input.lines();

    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await?;

    loop {
        tokio::select! {
            line = remote_lines.next_line() => {
                match line? {
                    Some(line) if line.is_empty() => {}
                    Some(line) => {
                        output.write_all(format_remote_line(&line).as_bytes()).await?;
                        output.flush().await?;
                    }
                    None => {
                        debug!("[CHAT] Remote side closed the stream");
                        return Ok(RelayEnd::RemoteClosed);
                    }
                }
            }
            line = local_lines.next_line() => {
                match line? {
                    Some(line) => {
                        writer.write_all(format!("{line}\n").as_bytes()).await?;
                        writer.flush().await?;
                        output.write_all(PROMPT.as_bytes()).await?;
                        output.flush().await?;
                    }
                    None => {
                        debug!("[CHAT] Local input closed");
                        writer.shutdown().await?;
                        return Ok(RelayEnd::LocalClosed);
                    }
                }
            }
        }
    }
}
