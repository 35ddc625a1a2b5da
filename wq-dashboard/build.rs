use std::env;
use std::fs;
use std::path::Path;

// Embedded fallbacks so the app builds before any real data is dropped
// into fixtures/.
const SAMPLE_SNAPSHOT: &str = "\
water_body,date,gid,chla_mean,chla_median,chla_max,chla_min,chla_count,turb_mean,turb_median,turb_max,turb_min,turb_count
Açude Castanhão,2020-06-15,42,950.0,940.0,1200.0,700.0,80,610.0,600.0,850.0,400.0,80
Açude Castanhão,2020-07-15,42,1025.0,1000.0,1400.0,760.0,95,640.0,620.0,900.0,420.0,95
";

const SAMPLE_MAPS_INDEX: &str = "\
42/Chla/Daily/20200615_Chla_Daily.png
42/Chla/Annual/Mean/2020_Mean.png
";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let copy_or_fallback = |name: &str, fallback: &str| {
        let src = Path::new("../fixtures").join(name);
        let dest = Path::new(&out_dir).join(name);
        if src.exists() {
            fs::copy(&src, &dest).unwrap();
        } else {
            fs::write(&dest, fallback).unwrap();
        }
    };

    copy_or_fallback("snapshot.csv", SAMPLE_SNAPSHOT);
    copy_or_fallback("maps_index.csv", SAMPLE_MAPS_INDEX);

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/snapshot.csv");
    println!("cargo:rerun-if-changed=../fixtures/maps_index.csv");
}
