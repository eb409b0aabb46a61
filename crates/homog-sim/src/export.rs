//! Report renderings: CSV series, JSON report, and a text summary.

use std::fmt::Write as _;
use std::io::Write;

use homog_core::types::{DecaySeries, DerivedQuantities};

use crate::error::SimError;
use crate::run::SimulationReport;

/// Header row of [`write_csv`].
pub const CSV_HEADER: &str = "time_s,size_um";

/// Write the series as CSV, one `time,size` row per sample.
pub fn write_csv<W: Write>(series: &DecaySeries, mut out: W) -> Result<(), SimError> {
    writeln!(out, "{CSV_HEADER}")?;
    for (t, r) in series.points() {
        writeln!(out, "{t},{r}")?;
    }
    out.flush()?;
    Ok(())
}

/// Write `(time, displacement)` rows for a bead oscillation trace.
pub fn write_trace_csv<W: Write>(times: &[f64], displacements: &[f64], mut out: W) -> Result<(), SimError> {
    writeln!(out, "time_s,displacement_m")?;
    for (t, x) in times.iter().zip(displacements) {
        writeln!(out, "{t},{x}")?;
    }
    out.flush()?;
    Ok(())
}

/// Write the full report as pretty-printed JSON.
pub fn write_json<W: Write>(report: &SimulationReport, mut out: W) -> Result<(), SimError> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Human-readable summary of a run.
pub fn render_summary(report: &SimulationReport) -> String {
    let p = &report.parameters;
    let d = &report.derived;
    let mut s = String::new();

    s.push_str("Parameters\n");
    let _ = writeln!(s, "  amplitude           {:.6} m", p.amplitude);
    let _ = writeln!(s, "  frequency           {:.3} Hz", p.frequency);
    let _ = writeln!(s, "  bead mass           {:.6} kg", p.bead_mass);
    let _ = writeln!(s, "  viscosity           {:.6} Pa·s", p.viscosity);
    let _ = writeln!(s, "  initial size        {:.3} µm", p.initial_size);
    let _ = writeln!(s, "  target size         {:.3} µm", p.target_size);
    let _ = writeln!(s, "  tube diameter       {:.6} m", p.tube_diameter);
    let _ = writeln!(s, "  alpha               {:.3}", p.alpha);

    s.push_str(&render_quantities(d));

    s.push_str("Decay\n");
    let _ = writeln!(s, "  time to target      {:.3} s", report.time_to_target);
    if let (Some(first), Some(last)) = (report.series.times.first(), report.series.times.last()) {
        let _ = writeln!(
            s,
            "  curve               {} samples, {first:.3} s to {last:.3} s",
            report.series.len()
        );
    }
    if let Some(final_size) = report.series.final_size() {
        let _ = writeln!(s, "  final size          {final_size:.3} µm");
    }
    s
}

/// Summary block for the derived quantities.
pub fn render_quantities(d: &DerivedQuantities) -> String {
    let mut s = String::from("Derived\n");
    let _ = writeln!(s, "  angular frequency   {:.6} rad/s", d.angular_frequency);
    let _ = writeln!(s, "  peak velocity       {:.6} m/s", d.peak_velocity);
    let _ = writeln!(s, "  kinetic energy      {:.6e} J", d.kinetic_energy);
    let _ = writeln!(s, "  shear rate          {:.6} 1/s", d.shear_rate);
    let _ = writeln!(s, "  decay rate constant {:.6} 1/s", d.decay_rate_constant);
    s
}
