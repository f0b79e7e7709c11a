//! Chart trace buffers.
//!
//! Three independent time series, appended at the slow-tick rate and
//! consumed by whatever renders them. Each has its own time axis and can
//! be cleared (axis rezeroed) without touching the others.

/// Chart-axis advance per slow-tick sample.
pub const CHART_TIME_STEP: f64 = 0.48;

/// Temperature chart: measured value against the ideal.
#[derive(Debug, Default, Clone)]
pub struct ThermalTrace {
    pub t: Vec<f64>,
    pub temperature: Vec<f64>,
    pub ideal: Vec<f64>,
    next_t: f64,
}

impl ThermalTrace {
    pub fn push(&mut self, temperature: f64, ideal: f64) {
        self.t.push(self.next_t);
        self.temperature.push(temperature);
        self.ideal.push(ideal);
        self.next_t += CHART_TIME_STEP;
    }

    pub fn clear(&mut self) {
        self.t.clear();
        self.temperature.clear();
        self.ideal.clear();
        self.next_t = 0.0;
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// Volume chart: total plus both reagent volumes.
#[derive(Debug, Default, Clone)]
pub struct VolumeTrace {
    pub t: Vec<f64>,
    pub total: Vec<f64>,
    pub reagent1: Vec<f64>,
    pub reagent2: Vec<f64>,
    next_t: f64,
}

impl VolumeTrace {
    pub fn push(&mut self, total: f64, reagent1: f64, reagent2: f64) {
        self.t.push(self.next_t);
        self.total.push(total);
        self.reagent1.push(reagent1);
        self.reagent2.push(reagent2);
        self.next_t += CHART_TIME_STEP;
    }

    pub fn clear(&mut self) {
        self.t.clear();
        self.total.clear();
        self.reagent1.clear();
        self.reagent2.clear();
        self.next_t = 0.0;
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// Pressure chart: measured value against the ideal.
#[derive(Debug, Default, Clone)]
pub struct PressureTrace {
    pub t: Vec<f64>,
    pub pressure: Vec<f64>,
    pub ideal: Vec<f64>,
    next_t: f64,
}

impl PressureTrace {
    pub fn push(&mut self, pressure: f64, ideal: f64) {
        self.t.push(self.next_t);
        self.pressure.push(pressure);
        self.ideal.push(ideal);
        self.next_t += CHART_TIME_STEP;
    }

    pub fn clear(&mut self) {
        self.t.clear();
        self.pressure.clear();
        self.ideal.clear();
        self.next_t = 0.0;
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// The three chart buffers as a unit.
#[derive(Debug, Default, Clone)]
pub struct ChartSet {
    pub thermal: ThermalTrace,
    pub volume: VolumeTrace,
    pub pressure: PressureTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_advances_by_chart_step() {
        let mut trace = ThermalTrace::default();
        trace.push(20.0, 25.0);
        trace.push(21.0, 25.0);
        trace.push(22.0, 25.0);
        assert_eq!(trace.t.len(), 3);
        assert_eq!(trace.t[0], 0.0);
        assert!((trace.t[1] - CHART_TIME_STEP).abs() < 1e-12);
        assert!((trace.t[2] - 2.0 * CHART_TIME_STEP).abs() < 1e-12);
    }

    #[test]
    fn clear_rezeroes_axis_independently() {
        let mut charts = ChartSet::default();
        charts.thermal.push(20.0, 25.0);
        charts.thermal.push(21.0, 25.0);
        charts.pressure.push(1.0, 1.5);

        charts.thermal.clear();
        assert!(charts.thermal.is_empty());
        // pressure untouched
        assert_eq!(charts.pressure.len(), 1);

        // a fresh sample restarts the cleared axis at zero
        charts.thermal.push(22.0, 25.0);
        assert_eq!(charts.thermal.t[0], 0.0);
    }

    #[test]
    fn volume_trace_carries_three_series() {
        let mut trace = VolumeTrace::default();
        trace.push(40.0, 30.0, 10.0);
        assert_eq!(trace.total[0], 40.0);
        assert_eq!(trace.reagent1[0], 30.0);
        assert_eq!(trace.reagent2[0], 10.0);
    }
}
