#![no_main]

use brook_wav::{SliceSource, WavReader};
use libfuzzer_sys::fuzz_target;

// Parse arbitrary bytes as a WAV stream and drain it through the 32-bit
// decoder in bounded steps. Neither step may panic or read out of bounds.
fuzz_target!(|data: &[u8]| {
    if let Ok(mut reader) = WavReader::new(SliceSource::new(data)) {
        let mut samples = [0i32; 256];
        while let Ok(count) = reader.read_i32(&mut samples) {
            if count == 0 {
                break;
            }
        }
    }
});
