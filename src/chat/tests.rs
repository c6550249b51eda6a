#[cfg(test)]
mod chat_tests {
    use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
    use crate::chat::chat::{format_remote_line, relay};
    use crate::chat::enums::relay_end::RelayEnd;

    #[test]
    fn test_format_remote_line() {
        assert_eq!(format_remote_line("hi"), "\x1b[32mhi\n\x1b[0m> ");
    }

    #[tokio::test]
    async fn test_remote_lines_are_printed_until_close() {
        let (local_end, mut remote_end) = tokio::io::duplex(1024);
        let (_input_writer, input_reader) = tokio::io::duplex(64);
        let mut output = Vec::new();

        remote_end.write_all(b"hello\nworld\n").await.unwrap();
        drop(remote_end);

        let end = relay(local_end, BufReader::new(input_reader), &mut output).await.unwrap();
        assert_eq!(end, RelayEnd::RemoteClosed);
        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed, format!("> {}{}", format_remote_line("hello"), format_remote_line("world")));
    }

    #[tokio::test]
    async fn test_typed_lines_are_sent() {
        let (local_end, remote_end) = tokio::io::duplex(1024);
        let input: &[u8] = b"first\nsecond\n";
        let mut output = Vec::new();

        let end = relay(local_end, BufReader::new(input), &mut output).await.unwrap();
        assert_eq!(end, RelayEnd::LocalClosed);

        let mut received = String::new();
        let mut remote = BufReader::new(remote_end);
        remote.read_to_string(&mut received).await.unwrap();
        assert_eq!(received, "first\nsecond\n");
    }

    #[tokio::test]
    async fn test_remote_sees_lines_in_order() {
        let (local_end, remote_end) = tokio::io::duplex(1024);
        let input: &[u8] = b"a\nb\nc\n";
        let mut output = Vec::new();
        relay(local_end, BufReader::new(input), &mut output).await.unwrap();

        let mut lines = BufReader::new(remote_end).lines();
        let mut seen = Vec::new();
        while let Some(line) = lines.next_line().await.unwrap() {
            seen.push(line);
        }
        assert_eq!(seen, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_empty_remote_lines_are_skipped() {
        let (local_end, mut remote_end) = tokio::io::duplex(1024);
        let (_input_writer, input_reader) = tokio::io::duplex(64);
        let mut output = Vec::new();

        remote_end.write_all(b"\nhello\n\n").await.unwrap();
        drop(remote_end);

        relay(local_end, BufReader::new(input_reader), &mut output).await.unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), format!("> {}", format_remote_line("hello")));
    }

    #[tokio::test]
    async fn test_keyboard_is_reused_across_relays() {
        let (mut typing, keyboard_reader) = tokio::io::duplex(64);
        let mut keyboard = BufReader::new(keyboard_reader);

        let (first_local, first_remote) = tokio::io::duplex(1024);
        drop(first_remote);
        let end = relay(first_local, &mut keyboard, Vec::new()).await.unwrap();
        assert_eq!(end, RelayEnd::RemoteClosed);

        typing.write_all(b"later\n").await.unwrap();
        drop(typing);

        let (second_local, second_remote) = tokio::io::duplex(1024);
        let end = relay(second_local, &mut keyboard, Vec::new()).await.unwrap();
        assert_eq!(end, RelayEnd::LocalClosed);

        let mut received = String::new();
        BufReader::new(second_remote).read_to_string(&mut received).await.unwrap();
        assert_eq!(received, "later\n");
    }
}
