#![allow(dead_code)]

use baylights::light::RawLightRow;

pub const HOME_LATITUDE: f64 = 39.0;
pub const HOME_LONGITUDE: f64 = -75.3;
pub const DECLINATION: f64 = 12.0;

pub fn home_row() -> RawLightRow {
    RawLightRow::new()
        .with("latitude", &HOME_LATITUDE.to_string())
        .with("longitude", &HOME_LONGITUDE.to_string())
        .with("bearing", &DECLINATION.to_string())
}

pub fn located_light(name: &str, latitude: f64, longitude: f64) -> RawLightRow {
    RawLightRow::new()
        .with("name", name)
        .with("latitude", &latitude.to_string())
        .with("longitude", &longitude.to_string())
        .with("rate", "4.0")
        .with("height", "50")
        .with("visibility", "12")
        .with("style", "flashing")
        .with("color", "red")
}

pub fn declared_light(name: &str, bearing: f64, offset: i32) -> RawLightRow {
    RawLightRow::new()
        .with("name", name)
        .with("bearing", &bearing.to_string())
        .with("offset", &offset.to_string())
        .with("rate", "2.5")
        .with("height", "20")
        .with("visibility", "5")
}

/// A small Delaware Bay style CSV: home row plus a mix of located and
/// bearing-only lights
pub const SAMPLE_CSV: &str = "\
name,label,style,color,rate,offset,height,visibility,bearing,latitude,longitude,link
Home,,,,,,,,12.0,39.0,-75.3,
Ship John Shoal,,flashing,red,10,0,50,8,,39.3053,-75.3767,https://example.org/ship-john
Fourteen Foot Bank,Old Fourteen,occulting,white,4,1200,59,13,,39.0482,-75.1827,
Miah Maull Shoal,,flashing,red,6,300,59,15,,39.1268,-75.2097,
Range Rear,,,green,3,0,40,8,-150.0,,,
Unlit Marker,,,,,,,,,,,
";
