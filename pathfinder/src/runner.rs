use crate::{
    algorithms::{Algorithm, SearchOutcome},
    animation::Sequencer,
    grid::Grid,
    stats::{SearchRecord, StatisticsSink},
};

/// resets the grid, runs one algorithm through the sequencer and records the result
pub struct SearchRunner {
    sequencer: Sequencer,
    sinks: Vec<Box<dyn StatisticsSink>>,
}

impl SearchRunner {
    pub fn new(sequencer: Sequencer) -> Self {
        Self {
            sequencer,
            sinks: Vec::new(),
        }
    }

    pub fn with_sink(mut self, sink: impl StatisticsSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut Sequencer {
        &mut self.sequencer
    }

    /// holds the grid exclusively until the run and its bookkeeping finish
    pub async fn execute(
        &mut self,
        grid: &mut Grid,
        algorithm: Algorithm,
    ) -> eyre::Result<SearchOutcome> {
        let endpoints = grid.endpoints()?;
        let (start, end) = endpoints;

        grid.clear_path();

        log::info!("solving {} grid with {}", grid.size(), algorithm);
        log::debug!("{} → {}, {} walls", start, end, grid.walls().len());

        let outcome = algorithm.run(grid, &mut self.sequencer).await?;

        if outcome.success {
            log::debug!(
                "found path of {} cells, {} expanded ({:.2}ms)",
                outcome.path_length(),
                outcome.visited_count,
                outcome.execution_time_ms()
            );
            grid.mark_path(&outcome.path);
            self.sequencer.play_path(&outcome.path).await;
        } else {
            log::debug!(
                "no path: {} cells expanded ({:.2}ms)",
                outcome.visited_count,
                outcome.execution_time_ms()
            );
        }
        self.sequencer.finish(outcome.success);

        let record = SearchRecord::new(algorithm, grid, endpoints, &outcome);
        for sink in &mut self.sinks {
            sink.record(&record)?;
        }

        Ok(outcome)
    }
}

impl Default for SearchRunner {
    fn default() -> Self {
        Self::new(Sequencer::default())
    }
}
