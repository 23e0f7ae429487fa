//! Integration tests for tt-output.

use std::time::Duration;

use tt_core::{AgentId, Outcome, Position, Symbol, TraceSequence, TrapId};

fn walk() -> TraceSequence {
    let mut seq = TraceSequence::new(AgentId(3), Outcome::Finished);
    seq.record(Duration::ZERO, Position::new(1, 2), Symbol('D'));
    seq.record(Duration::from_micros(12_345), Position::new(2, 2), Symbol('D'));
    seq
}

#[cfg(test)]
mod text_tests {
    use super::*;
    use crate::{TextSink, TextWriter, TraceOutput};
    use tt_sim::TraceSink;

    fn render(sink: TextSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_writer().into_inner()).unwrap()
    }

    #[test]
    fn line_format() {
        let mut sink = TextSink::text(Vec::new());
        sink.on_sequence(&walk());
        sink.on_sequence(&TraceSequence::trap_placed(TrapId(0), Position::new(4, 10)));
        sink.on_end(1, 15, 15);
        assert!(sink.take_error().is_none());

        let text = render(sink);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, [
            "0.000000  3  1  2 D",
            "0.012345  3  2  2 D",
            "0.000000 -1  4 10 #",
            "-1 1 15 15",
        ]);
    }

    #[test]
    fn counts_rows() {
        let mut sink = TraceOutput::new(TextWriter::new(Vec::new()));
        sink.on_sequence(&walk());
        assert_eq!(sink.rows_written(), 2);
    }

    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_are_kept_for_later() {
        let mut sink = TextSink::text(Broken);
        sink.on_sequence(&walk());
        sink.on_end(1, 5, 5);
        assert!(matches!(sink.take_error(), Some(crate::OutputError::Io(_))));
        assert!(sink.take_error().is_none(), "taken once");
    }

    #[tokio::test(start_paused = true)]
    async fn integration_text() {
        use tt_core::TravelConfig;
        use tt_sim::SimBuilder;

        let cfg = TravelConfig {
            width:       5,
            height:      5,
            travelers:   2,
            wild_spawns: 1,
            traps:       1,
            min_steps:   4,
            max_steps:   4,
            ..TravelConfig::default()
        };
        let mut sim = SimBuilder::new(cfg).seed(11).build().unwrap();
        let mut sink = TextSink::text(Vec::new());
        sim.run(&mut sink).await.unwrap();
        assert!(sink.take_error().is_none());

        let rows = sink.rows_written();
        let text = render(sink);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), rows + 1);
        assert_eq!(*lines.last().unwrap(), "-1 2 5 5");
        assert!(lines.iter().any(|l| l.ends_with(" #")), "trap placement announced");
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{CsvSink, CsvWriter, TraceOutput, TraceWriter};
    use tt_sim::TraceSink;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_header_correct() {
        let dir = tmp();
        let path = dir.path().join("traces.csv");
        let mut w = CsvWriter::new(&path).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["timestamp", "id", "x", "y", "symbol"]);
    }

    #[test]
    fn csv_rows_match_traces() {
        let dir = tmp();
        let path = dir.path().join("traces.csv");
        let mut sink: CsvSink = TraceOutput::new(CsvWriter::new(&path).unwrap());
        sink.on_sequence(&walk());
        sink.on_sequence(&TraceSequence::trap_collision(
            TrapId(2),
            Duration::from_millis(700),
            Position::new(0, 4),
        ));
        sink.on_end(1, 5, 5);
        assert!(sink.take_error().is_none());

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3, "no end marker in CSV");
        assert_eq!(&rows[1][0], "0.012345");
        assert_eq!(&rows[1][1], "3");
        assert_eq!(&rows[2][1], "-3");
        assert_eq!(&rows[2][3], "4");
        assert_eq!(&rows[2][4], "#");
    }

    #[test]
    fn csv_to_open_handle() {
        let mut buf = Vec::new();
        {
            let mut sink = TraceOutput::new(CsvWriter::from_writer(&mut buf).unwrap());
            sink.on_sequence(&walk());
            sink.on_end(1, 5, 5);
            assert!(sink.take_error().is_none());
        }

        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["timestamp", "id", "x", "y", "symbol"]);
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), walk().len());
        assert_eq!(&rows[1][0], "0.012345");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(&dir.path().join("traces.csv")).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}
