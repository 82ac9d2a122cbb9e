use crate::core::{Pipeline, ResultSink};
use crate::domain::model::{
    format_elapsed, ElapsedPlacement, ResultValue, RunSummary, TimingScope, EXECUTION_TIME_LABEL,
};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::time::{Duration, Instant};

pub struct EtlEngine<P: Pipeline, S: ResultSink> {
    pipeline: P,
    sink: S,
    monitor: SystemMonitor,
}

impl<P: Pipeline, S: ResultSink> EtlEngine<P, S> {
    pub fn new(pipeline: P, sink: S) -> Self {
        Self::new_with_monitoring(pipeline, sink, false)
    }

    pub fn new_with_monitoring(pipeline: P, sink: S, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            sink,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn observe(&self, phase: &str) -> Duration {
        let start = Instant::now();
        self.monitor.log_stats(phase);
        start.elapsed()
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        let utility = self.pipeline.utility();
        let layout = self.pipeline.layout();
        tracing::info!("🚀 Starting {} run", utility);
        let run_start = Instant::now();

        // Extract
        let extraction = self.pipeline.extract()?;
        for invalid in &extraction.rejected {
            self.sink.report_invalid(invalid)?;
        }
        tracing::info!(
            "Read {} lines: {} records, {} rejected",
            extraction.lines_read,
            extraction.records.len(),
            extraction.rejected.len()
        );
        // 監控取樣不計入回報的執行時間
        let mut monitor_overhead = self.observe("Extract");

        let records = extraction.records.len();
        let rejected = extraction.rejected.len();

        // Transform
        let stage_start = Instant::now();
        let mut results = self.pipeline.transform(extraction.records)?;
        let aggregation_elapsed = stage_start.elapsed();
        tracing::debug!("Aggregated {} result entries", results.len());
        let stage_overhead = self.observe("Transform");
        monitor_overhead += stage_overhead;

        let measure = |timing: TimingScope| match timing {
            TimingScope::Aggregation => aggregation_elapsed,
            TimingScope::AggregationAndWrite => stage_start.elapsed().saturating_sub(stage_overhead),
            TimingScope::WholeRun => run_start.elapsed().saturating_sub(monitor_overhead),
        };

        // Load
        let elapsed = match layout.elapsed {
            ElapsedPlacement::Entry => {
                let elapsed = measure(layout.timing);
                results.push(EXECUTION_TIME_LABEL, ResultValue::Text(format_elapsed(elapsed)));
                self.sink.write_results(&results, layout.leading_blank_line)?;
                elapsed
            }
            ElapsedPlacement::Trailer => {
                self.sink.write_results(&results, layout.leading_blank_line)?;
                let elapsed = measure(layout.timing);
                let trailer = format!("{}: {}", EXECUTION_TIME_LABEL, format_elapsed(elapsed));
                self.sink.write_trailer(&trailer)?;
                elapsed
            }
        };
        self.monitor.log_stats("Load");

        let summary = RunSummary {
            utility,
            output_path: self.sink.location(),
            records,
            rejected,
            entries: results.len(),
            elapsed,
        };

        tracing::info!(
            "✅ {} run finished: {} entries written to {}",
            utility,
            summary.entries,
            summary.output_path.display()
        );
        self.monitor.log_final_stats();

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{
        Extraction, InvalidLine, OutputLayout, ResultSet, Utility,
    };
    use std::cell::Cell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct MemorySink {
        console: Vec<String>,
        file: String,
    }

    impl ResultSink for MemorySink {
        fn report_invalid(&mut self, invalid: &InvalidLine) -> Result<()> {
            self.console.push(invalid.to_string());
            Ok(())
        }

        fn write_results(&mut self, results: &ResultSet, leading_blank_line: bool) -> Result<()> {
            if leading_blank_line {
                self.file.push('\n');
            }
            for line in results.lines() {
                self.console.push(line.clone());
                self.file.push_str(&line);
                self.file.push('\n');
            }
            Ok(())
        }

        fn write_trailer(&mut self, line: &str) -> Result<()> {
            self.console.push(line.to_string());
            self.file.push_str(line);
            Ok(())
        }

        fn location(&self) -> PathBuf {
            PathBuf::from("memory")
        }
    }

    struct FixedPipeline {
        utility: Utility,
        rejected: Vec<InvalidLine>,
    }

    impl Pipeline for FixedPipeline {
        type Record = i64;

        fn utility(&self) -> Utility {
            self.utility
        }

        fn extract(&self) -> Result<Extraction<i64>> {
            Ok(Extraction {
                records: vec![7, 8],
                rejected: self.rejected.clone(),
                lines_read: 2 + self.rejected.len(),
            })
        }

        fn transform(&self, records: Vec<i64>) -> Result<ResultSet> {
            let mut results = ResultSet::new();
            for record in records {
                results.push("Value", ResultValue::Count(record as usize));
            }
            Ok(results)
        }
    }

    #[test]
    fn test_entry_placement_appends_execution_time_entry() {
        let pipeline = FixedPipeline {
            utility: Utility::Statistics,
            rejected: vec![],
        };
        let mut engine = EtlEngine::new(pipeline, MemorySink::default());

        let summary = engine.run().unwrap();
        let sink = engine.into_sink();

        assert_eq!(summary.entries, 3);
        assert_eq!(sink.console[0], "Value: 7");
        assert!(sink.console[2].starts_with("Execution Time: "));
        assert!(sink.file.ends_with(" seconds\n"));
    }

    #[test]
    fn test_trailer_placement_and_rejected_lines() {
        let pipeline = FixedPipeline {
            utility: Utility::WordCount,
            rejected: vec![InvalidLine {
                text: "x".to_string(),
                reason: "bad".to_string(),
            }],
        };
        let mut engine = EtlEngine::new(pipeline, MemorySink::default());

        let summary = engine.run().unwrap();
        let sink = engine.into_sink();

        assert_eq!(summary.records, 2);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.entries, 2);
        assert_eq!(sink.console[0], "Error parsing line 'x': bad");
        assert!(sink.file.starts_with("\nValue: 7\nValue: 8\nExecution Time: "));
        assert!(!sink.file.ends_with('\n'));
    }

    #[test]
    fn test_layouts_per_utility() {
        assert_eq!(
            Utility::Conversion.layout(),
            OutputLayout {
                timing: TimingScope::AggregationAndWrite,
                elapsed: ElapsedPlacement::Trailer,
                leading_blank_line: false,
            }
        );
        assert_eq!(Utility::Statistics.layout().elapsed, ElapsedPlacement::Entry);
        assert!(Utility::WordCount.layout().leading_blank_line);
    }

    struct TimedPipeline {
        transform_time: Cell<Duration>,
    }

    impl Pipeline for TimedPipeline {
        type Record = f64;

        fn utility(&self) -> Utility {
            Utility::Statistics
        }

        fn extract(&self) -> Result<Extraction<f64>> {
            Ok(Extraction {
                records: vec![1.0, 2.0],
                rejected: vec![],
                lines_read: 2,
            })
        }

        fn transform(&self, records: Vec<f64>) -> Result<ResultSet> {
            let start = Instant::now();
            std::thread::sleep(Duration::from_millis(20));
            let mut results = ResultSet::new();
            results.push("Count", ResultValue::Count(records.len()));
            self.transform_time.set(start.elapsed());
            Ok(results)
        }
    }

    #[test]
    fn test_aggregation_time_excludes_monitor_sampling() {
        let pipeline = TimedPipeline {
            transform_time: Cell::new(Duration::ZERO),
        };
        let mut engine = EtlEngine::new_with_monitoring(pipeline, MemorySink::default(), true);

        let summary = engine.run().unwrap();
        let transform_time = engine.pipeline.transform_time.get();

        assert!(summary.elapsed >= transform_time);
        assert!(summary.elapsed < transform_time + Duration::from_millis(5));

        let sink = engine.into_sink();
        assert_eq!(
            sink.console.last().unwrap(),
            &format!("Execution Time: {}", format_elapsed(summary.elapsed))
        );
    }
}
