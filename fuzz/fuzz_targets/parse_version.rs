#![no_main]

use libfuzzer_sys::fuzz_target;
use semver_core::Version;

fuzz_target!(|data: &str| {
    let _parse_res = Version::parse(data);
});
