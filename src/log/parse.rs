use crate::log::table::TimingTable;
use anyhow::{Context, bail};
use regex::Regex;
use std::fs;

/// Parse a benchmark timing log into an iteration-count -> seconds table.
///
/// Expected records (one per line):
/// <free text> <iterations> [<one word>] : <seconds> [<free text>]
///
/// Example:
/// Tempo de execução para 1000 iterações: 2.345678 segundos
pub fn parse_timing_file(path: &str) -> anyhow::Result<TimingTable> {
    let text = fs::read_to_string(path).with_context(|| format!("read timing log {}", path))?;

    // The iteration count sits at most one word before a ':'; the elapsed
    // time is the first token after it. The prefix only consumes whole
    // whitespace-terminated tokens, so digits embedded in a longer word do
    // not count.
    // Capture:
    // 1) iterations: integer
    // 2) seconds: float/integer, optional exponent
    let re = Regex::new(
        r#"^\s*(?:\S+\s+)*?(\d+)(?:\s+\S+)?\s*:\s*([0-9]*\.?[0-9]+(?:[eE][+-]?[0-9]+)?)(?:\s+.*)?$"#,
    )?;

    let mut out = TimingTable::new();
    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;
        let line = line.trim_end();

        if line.trim().is_empty() {
            continue;
        }

        let caps = match re.captures(line) {
            Some(c) => c,
            None => {
                bail!(
                    "timing log parse error at {}:{}: cannot parse line: {:?}",
                    path,
                    lno,
                    line
                );
            }
        };

        let iterations: u64 = caps.get(1).unwrap().as_str().parse()?;
        let seconds: f64 = caps.get(2).unwrap().as_str().parse()?;

        if out.insert(iterations, seconds).is_some() {
            eprintln!(
                "WARN: duplicate entry for {} iterations at {}:{}, keeping the later value",
                iterations, path, lno
            );
        }
    }

    if out.is_empty() {
        bail!("timing log {} contained no records", path);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fixture(name: &str, contents: &str) -> String {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, contents).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn parses_canonical_benchmark_lines() {
        let path = fixture(
            "speedup_viz_canonical.log",
            "Tempo de execução para 250 iterações: 1.482391 segundos\n\
             Tempo de execução para 500 iterações: 2.961847 segundos\n\
             Tempo de execução para 1000 iterações: 5.903218 segundos\n",
        );

        let table = parse_timing_file(&path).unwrap();
        assert_eq!(
            table,
            TimingTable::from([(250, 1.482391), (500, 2.961847), (1000, 5.903218)])
        );
    }

    #[test]
    fn parses_colon_label_lines() {
        let path = fixture(
            "speedup_viz_colon_label.log",
            "Iteracoes: 10 : 1.0 segundos\nIteracoes: 20 : 1.8 segundos\n",
        );

        let table = parse_timing_file(&path).unwrap();
        assert_eq!(table, TimingTable::from([(10, 1.0), (20, 1.8)]));
    }

    #[test]
    fn both_line_shapes_parse_identically() {
        let canonical = fixture(
            "speedup_viz_shape_a.log",
            "Tempo de execução para 10 iterações: 1.0 segundos\n\
             Tempo de execução para 20 iterações: 1.8 segundos\n",
        );
        let labelled = fixture(
            "speedup_viz_shape_b.log",
            "Iteracoes: 10 : 1.0 segundos\nIteracoes: 20 : 1.8 segundos\n",
        );

        assert_eq!(
            parse_timing_file(&canonical).unwrap(),
            parse_timing_file(&labelled).unwrap()
        );
    }

    #[test]
    fn reads_checked_in_fixtures() {
        let parallel = parse_timing_file("testdata/tempo_execucao_paralelo.txt").unwrap();
        assert_eq!(
            parallel,
            TimingTable::from([
                (250, 1.482391),
                (500, 2.961847),
                (1000, 5.903218),
                (2000, 11.874562),
            ])
        );

        let sequential = parse_timing_file("testdata/tempo_execucao_sequencial.txt").unwrap();
        assert_eq!(
            sequential,
            TimingTable::from([
                (250, 4.127806),
                (500, 8.243114),
                (1000, 16.511902),
                (2000, 33.092447),
            ])
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        let path = fixture(
            "speedup_viz_blank.log",
            "\nIteracoes: 10 : 1.0 segundos\n   \n\nIteracoes: 20 : 1.8 segundos\n\n",
        );

        let table = parse_timing_file(&path).unwrap();
        assert_eq!(table, TimingTable::from([(10, 1.0), (20, 1.8)]));
    }

    #[test]
    fn duplicate_iteration_count_keeps_the_later_value() {
        let path = fixture(
            "speedup_viz_dup.log",
            "Iteracoes: 10 : 1.0 segundos\nIteracoes: 10 : 2.5 segundos\n",
        );

        let table = parse_timing_file(&path).unwrap();
        assert_eq!(table, TimingTable::from([(10, 2.5)]));
    }

    #[test]
    fn reparsing_is_idempotent() {
        let path = fixture(
            "speedup_viz_idempotent.log",
            "Tempo de execução para 100 iterações: 0.731502 segundos\n\
             Tempo de execução para 200 iterações: 1.468204 segundos\n",
        );

        assert_eq!(
            parse_timing_file(&path).unwrap(),
            parse_timing_file(&path).unwrap()
        );
    }

    #[test]
    fn non_numeric_iteration_count_is_an_error() {
        let path = fixture(
            "speedup_viz_bad_iterations.log",
            "Iteracoes: dez : 1.0 segundos\n",
        );

        let err = parse_timing_file(&path).unwrap_err();
        assert!(err.to_string().contains("cannot parse line"));
        assert!(err.to_string().contains(":1"));
    }

    #[test]
    fn missing_colon_is_an_error() {
        let path = fixture(
            "speedup_viz_no_colon.log",
            "Tempo de execução para 1000 iterações 2.345678 segundos\n",
        );

        assert!(parse_timing_file(&path).is_err());
    }

    #[test]
    fn unparsable_time_is_an_error() {
        let path = fixture(
            "speedup_viz_bad_time.log",
            "Iteracoes: 10 : rapido segundos\n",
        );

        assert!(parse_timing_file(&path).is_err());
    }

    #[test]
    fn negative_time_is_an_error() {
        let path = fixture(
            "speedup_viz_negative.log",
            "Iteracoes: 10 : -1.0 segundos\n",
        );

        assert!(parse_timing_file(&path).is_err());
    }

    #[test]
    fn digits_embedded_in_a_word_do_not_count() {
        let path = fixture("speedup_viz_embedded.log", "caso p1000q: 2.0 segundos\n");

        assert!(parse_timing_file(&path).is_err());
    }

    #[test]
    fn empty_input_is_an_error() {
        let path = fixture("speedup_viz_empty.log", "");

        let err = parse_timing_file(&path).unwrap_err();
        assert!(err.to_string().contains("contained no records"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = parse_timing_file("speedup_viz_does_not_exist.log").unwrap_err();
        assert!(err.to_string().contains("read timing log"));
    }
}
