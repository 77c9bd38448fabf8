use chrono::{DateTime, Local};

/// One spectral channel of the sensor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Channel {
    pub name: &'static str,
    pub wavelength_nm: f64,
}

/// The six visible channels of the AS7262.
pub const AS7262_CHANNELS: [Channel; 6] = [
    Channel { name: "V", wavelength_nm: 450.0 },
    Channel { name: "B", wavelength_nm: 500.0 },
    Channel { name: "G", wavelength_nm: 550.0 },
    Channel { name: "Y", wavelength_nm: 570.0 },
    Channel { name: "O", wavelength_nm: 600.0 },
    Channel { name: "R", wavelength_nm: 650.0 },
];

/// A single reading: one value per channel, in channel order.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    pub wavelengths: Vec<f64>,
    pub values: Vec<f64>,
    pub taken_at: DateTime<Local>,
}

impl Spectrum {
    pub fn new(wavelengths: Vec<f64>, values: Vec<f64>) -> Self {
        debug_assert_eq!(wavelengths.len(), values.len());
        Self {
            wavelengths,
            values,
            taken_at: Local::now(),
        }
    }

    pub fn as7262(values: [f64; 6]) -> Self {
        Self::new(
            AS7262_CHANNELS.iter().map(|c| c.wavelength_nm).collect(),
            values.to_vec(),
        )
    }

    /// `[wavelength, value]` pairs.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.wavelengths
            .iter()
            .zip(&self.values)
            .map(|(&w, &v)| [w, v])
            .collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Running mean over consecutive readings.
#[derive(Default, Debug)]
pub struct SpectrumAverage {
    wavelengths: Vec<f64>,
    sum: Vec<f64>,
    count: usize,
}

impl SpectrumAverage {
    pub fn reset(&mut self) {
        self.wavelengths.clear();
        self.sum.clear();
        self.count = 0;
    }

    /// Number of readings folded into the current mean.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Fold in a reading and return the mean so far.
    ///
    /// A reading on a different channel set restarts the average.
    pub fn add(&mut self, spectrum: &Spectrum) -> Spectrum {
        if self.wavelengths != spectrum.wavelengths {
            self.reset();
            self.wavelengths = spectrum.wavelengths.clone();
            self.sum = vec![0.0; spectrum.len()];
        }
        for (acc, v) in self.sum.iter_mut().zip(&spectrum.values) {
            *acc += v;
        }
        self.count += 1;
        let n = self.count as f64;
        Spectrum {
            wavelengths: self.wavelengths.clone(),
            values: self.sum.iter().map(|s| s / n).collect(),
            taken_at: spectrum.taken_at,
        }
    }
}
