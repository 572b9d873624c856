// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drive [`EditorSession::read_line()`] end to end, the way a shell would: one session,
//! many calls, with bytes arriving from different kinds of [`ByteSource`].

use pretty_assertions::assert_eq;
use r3bl_line_reader::{ByteSource, ChannelByteSource, EditorSession, ReadlineError,
                       ReadlineEvent, StdoutMock, TracingConfig, VecByteSource,
                       setup_default_miette_global_report_handler, try_create_temp_dir};
use serial_test::serial;
use tracing_core::LevelFilter;

/// Call `read_line()` until end of input, collecting the submitted lines.
fn read_all_lines<const C: usize, const H: usize>(
    session: &mut EditorSession<C, H>,
    source: &mut dyn ByteSource,
    stdout_mock: &mut StdoutMock,
) -> Vec<String> {
    let mut lines = vec![];
    while let ReadlineEvent::Line(line) = session.read_line("$ ", source, stdout_mock).unwrap()
    {
        lines.push(line);
    }
    lines
}

#[test]
fn test_scripted_shell_session() {
    let mut session = EditorSession::<64, 8>::new();
    let mut stdout_mock = StdoutMock::default();
    let mut source = VecByteSource::new(
        b"ls\r\n\
          cd /tmp\r\n\
          \x1b[A\x1b[A\r\n\
          \r\n\
          ech\x1b[D\x1b[D\x1b[Cx\x7f\x1b[Co\r\n\
          \x04",
    );

    let lines = read_all_lines(&mut session, &mut source, &mut stdout_mock);

    assert_eq!(lines, vec!["ls", "cd /tmp", "ls", "", "echo"]);
    assert_eq!(session.history().commit_count(), 4);
    let history = session
        .history()
        .iter()
        .map(|(_, line)| line.as_str().into_owned())
        .collect::<Vec<_>>();
    assert_eq!(history, vec!["ls", "cd /tmp", "ls", "echo"]);
    assert_eq!(source.detach_count, 1);
    assert_eq!(source.remaining(), 0);
}

#[test]
fn test_history_wraps_after_capacity() {
    let mut session = EditorSession::<16, 3>::new();
    let mut stdout_mock = StdoutMock::default();
    let mut source = VecByteSource::new(b"a\rb\rc\rd\r");
    read_all_lines(&mut session, &mut source, &mut stdout_mock);

    // Up four times only reaches back three entries.
    stdout_mock.clear();
    source.push_bytes(b"\x1b[A\x1b[A\x1b[A\x1b[A\r");
    let event = session.read_line("$ ", &mut source, &mut stdout_mock).unwrap();

    assert_eq!(event, ReadlineEvent::Line("b".into()));
    let visible = stdout_mock.get_copy_of_buffer_as_string_strip_ansi();
    assert!(visible.contains("$ d"));
    assert!(visible.contains("$ c"));
    assert!(visible.contains("$ b"));
    assert!(!visible.contains("$ a"));
    // Submitting the recalled `b` commits it again and overwrites the oldest entry.
    assert_eq!(session.history().get(1), None);
    assert_eq!(session.history().get(4).unwrap().as_str(), "b");
}

#[test]
fn test_long_line_is_truncated_at_capacity() {
    let mut session = EditorSession::<8, 2>::new();
    let mut stdout_mock = StdoutMock::default();
    let mut source = VecByteSource::new(b"0123456789\r");

    let event = session.read_line("", &mut source, &mut stdout_mock).unwrap();

    assert_eq!(event, ReadlineEvent::Line("01234567".into()));
    assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "01234567\n");
}

#[test]
fn test_echo_matches_line_after_edits() {
    let mut session = EditorSession::<64, 8>::new();
    let mut stdout_mock = StdoutMock::default();
    let mut source = VecByteSource::new(b"held\x1b[D\x1b[D\x08\x7fwor\r");

    let event = session.read_line("> ", &mut source, &mut stdout_mock).unwrap();

    assert_eq!(event, ReadlineEvent::Line("world".into()));
    assert_eq!(
        stdout_mock.get_copy_of_buffer(),
        b"> held\x08\x08\x08ld \x08\x08\x08\x08ld \x08\x08\x08wld\x08\x08old\x08\x08rld\x08\x08\n"
    );
}

#[test]
fn test_channel_byte_source_with_producer_thread() {
    let (sender, mut source) = ChannelByteSource::channel(8);
    let producer = std::thread::spawn(move || {
        for byte in b"first\r\nsecond\r" {
            sender.blocking_send(*byte).unwrap();
        }
        // Dropping the sender closes the source.
    });

    let mut session = EditorSession::<64, 8>::new();
    let mut stdout_mock = StdoutMock::default();
    let lines = read_all_lines(&mut session, &mut source, &mut stdout_mock);
    producer.join().unwrap();

    assert_eq!(lines, vec!["first", "second"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_channel_byte_source_fed_by_async_task() {
    let (sender, mut source) = ChannelByteSource::channel(1);

    let producer = tokio::spawn(async move {
        for byte in b"ping\r\x04" {
            sender.send(*byte).await.unwrap();
        }
        sender
    });

    // `blocking_recv()` must not run on an async worker thread.
    let (lines, detached_source) = tokio::task::spawn_blocking(move || {
        let mut session = EditorSession::<64, 8>::new();
        let mut stdout_mock = StdoutMock::default();
        let lines = read_all_lines(&mut session, &mut source, &mut stdout_mock);
        (lines, source)
    })
    .await
    .unwrap();

    assert_eq!(lines, vec!["ping"]);

    // `Ctrl+D` detached the source, so the producer can't send any more.
    let sender = producer.await.unwrap();
    assert!(sender.send(b'x').await.is_err());
    drop(detached_source);
}

#[test]
fn test_session_logs_commits_to_file() {
    let dir = try_create_temp_dir().unwrap();
    let log_file = dir.join("session.log");
    let log_file_str = log_file.to_str().unwrap().to_string();

    let guard = TracingConfig::new_file(Some(log_file_str), LevelFilter::DEBUG)
        .install_thread_local()
        .unwrap();

    let mut session = EditorSession::<64, 8>::new();
    let mut stdout_mock = StdoutMock::default();
    let mut source = VecByteSource::new(b"logged\r");
    read_all_lines(&mut session, &mut source, &mut stdout_mock);
    drop(guard);

    let contents = std::fs::read_to_string(&log_file).unwrap();
    assert!(contents.contains("line committed"));
    assert!(contents.contains("logged"));
    assert!(contents.contains("byte source closed"));
    // Trace level events are filtered out.
    assert!(!contents.contains("decoded input"));
    // Nothing from the logger leaks into the console.
    assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "$ logged\n$ ");
}

#[test]
#[serial]
fn test_readline_error_renders_with_miette_hook() {
    setup_default_miette_global_report_handler("https://github.com/r3bl-org/r3bl-open-core/issues");

    let error = ReadlineError::from(std::io::Error::other("device unplugged"));
    let report = miette::Report::new(error);
    let rendered = format!("{report:?}");

    assert!(rendered.contains("device unplugged"));
    assert!(rendered.contains("r3bl_line_reader::io"));
}
