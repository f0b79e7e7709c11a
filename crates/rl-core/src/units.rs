// rl-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, ThermodynamicTemperature as UomTemperature, Time as UomTime,
    Volume as UomVolume, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64).
//
// Physical quantities at configuration and model boundaries use these;
// control-path signals (PID inputs/outputs) stay scalar `f64`.
pub type Pressure = UomPressure;
pub type Temperature = UomTemperature;
pub type Time = UomTime;
pub type Volume = UomVolume;
pub type FlowRate = UomVolumeRate;

#[inline]
pub fn liters(v: f64) -> Volume {
    use uom::si::volume::liter;
    Volume::new::<liter>(v)
}

#[inline]
pub fn as_liters(v: Volume) -> f64 {
    use uom::si::volume::liter;
    v.get::<liter>()
}

#[inline]
pub fn lpm(v: f64) -> FlowRate {
    use uom::si::volume_rate::liter_per_minute;
    FlowRate::new::<liter_per_minute>(v)
}

#[inline]
pub fn millis(v: f64) -> Time {
    use uom::si::time::millisecond;
    Time::new::<millisecond>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn atm(v: f64) -> Pressure {
    use uom::si::pressure::atmosphere;
    Pressure::new::<atmosphere>(v)
}
