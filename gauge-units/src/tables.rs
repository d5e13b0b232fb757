//! Built-in unit tables, one per category
//!
//! Multipliers are exact where the unit has a legal definition
//! (inch, pound, gallon, ...) and otherwise the usual reference value.

use gauge_core::{ConversionTable, TableBuilder, TableError};
use crate::{Category, CategoryTable};

/// Build the table for one built-in category
pub fn builtin_table(category: Category) -> Result<CategoryTable, TableError> {
    let units = match category {
        Category::Length => length_units(),
        Category::Mass => mass_units(),
        Category::Volume => volume_units(),
        Category::Time => time_units(),
        Category::Speed => speed_units(),
        Category::Acceleration => acceleration_units(),
        Category::Force => force_units(),
        Category::Energy => energy_units(),
        Category::Power => power_units(),
        Category::Pressure => pressure_units(),
        Category::Frequency => frequency_units(),
        Category::Data => data_units(),
        Category::Angle => angle_units(),
    };
    CategoryTable::new(category.name(), category.common_unit(), units.build()?)
}

fn length_units() -> TableBuilder {
    ConversionTable::builder()
        // SI
        .unit("m", 1.0)
        .unit("km", 1000.0)
        .unit("dm", 0.1)
        .unit("cm", 0.01)
        .unit("mm", 0.001)
        .unit("um", 1e-6)
        .unit("nm", 1e-9)
        .unit("pm", 1e-12)
        // Imperial/US
        .unit("in", 0.0254)
        .unit("ft", 0.3048)
        .unit("yd", 0.9144)
        .unit("mi", 1609.344)
        .unit("nmi", 1852.0)
        // Astronomical
        .unit("au", 149_597_870_700.0)
        .unit("ly", 9_460_730_472_580_800.0)
        .unit("pc", 30_856_775_814_913_673.0)
        .alias("meter", "m")
        .alias("meters", "m")
        .alias("metre", "m")
        .alias("metres", "m")
        .alias("kilometer", "km")
        .alias("kilometers", "km")
        .alias("kilometre", "km")
        .alias("kilometres", "km")
        .alias("centimeter", "cm")
        .alias("centimeters", "cm")
        .alias("millimeter", "mm")
        .alias("millimeters", "mm")
        .alias("μm", "um")
        .alias("micron", "um")
        .alias("microns", "um")
        .alias("inch", "in")
        .alias("inches", "in")
        .alias("foot", "ft")
        .alias("feet", "ft")
        .alias("yard", "yd")
        .alias("yards", "yd")
        .alias("mile", "mi")
        .alias("miles", "mi")
}

fn mass_units() -> TableBuilder {
    ConversionTable::builder()
        .unit("kg", 1.0)
        .unit("g", 0.001)
        .unit("mg", 1e-6)
        .unit("ug", 1e-9)
        .unit("t", 1000.0)
        .unit("lb", 0.453_592_37)
        .unit("oz", 0.028_349_523_125)
        .unit("st", 6.350_293_18)
        .unit("ton", 907.184_74)
        .unit("lton", 1016.046_908_8)
        .unit("ct", 0.0002)
        .unit("gr", 0.000_064_798_91)
        .alias("kilogram", "kg")
        .alias("kilograms", "kg")
        .alias("gram", "g")
        .alias("grams", "g")
        .alias("milligram", "mg")
        .alias("milligrams", "mg")
        .alias("μg", "ug")
        .alias("mcg", "ug")
        .alias("tonne", "t")
        .alias("tonnes", "t")
        .alias("pound", "lb")
        .alias("pounds", "lb")
        .alias("lbs", "lb")
        .alias("ounce", "oz")
        .alias("ounces", "oz")
        .alias("stone", "st")
}

fn volume_units() -> TableBuilder {
    ConversionTable::builder()
        // Metric, liter-based
        .unit("L", 1.0)
        .unit("dL", 0.1)
        .unit("cL", 0.01)
        .unit("mL", 0.001)
        .unit("m3", 1000.0)
        .unit("cm3", 0.001)
        .unit("mm3", 1e-6)
        // US fluid
        .unit("gal", 3.785_411_784)
        .unit("qt", 0.946_352_946)
        .unit("pt", 0.473_176_473)
        .unit("cup", 0.236_588_236_5)
        .unit("floz", 0.029_573_529_562_5)
        .unit("tbsp", 0.014_786_764_781_25)
        .unit("tsp", 0.004_928_921_593_75)
        // Imperial
        .unit("impgal", 4.546_09)
        .unit("imppt", 0.568_261_25)
        .unit("ft3", 28.316_846_592)
        .unit("in3", 0.016_387_064)
        .alias("l", "L")
        .alias("liter", "L")
        .alias("liters", "L")
        .alias("litre", "L")
        .alias("litres", "L")
        .alias("ml", "mL")
        .alias("milliliter", "mL")
        .alias("milliliters", "mL")
        .alias("dl", "dL")
        .alias("cl", "cL")
        .alias("cc", "cm3")
        .alias("m³", "m3")
        .alias("cm³", "cm3")
        .alias("gallon", "gal")
        .alias("gallons", "gal")
        .alias("quart", "qt")
        .alias("quarts", "qt")
        .alias("pint", "pt")
        .alias("pints", "pt")
        .alias("cups", "cup")
}

fn time_units() -> TableBuilder {
    ConversionTable::builder()
        .unit("s", 1.0)
        .unit("ms", 0.001)
        .unit("us", 1e-6)
        .unit("ns", 1e-9)
        .unit("min", 60.0)
        .unit("h", 3600.0)
        .unit("d", 86_400.0)
        .unit("wk", 604_800.0)
        .unit("mo", 2_629_746.0) // average Gregorian month
        .unit("yr", 31_556_952.0) // average Gregorian year
        .alias("sec", "s")
        .alias("second", "s")
        .alias("seconds", "s")
        .alias("millisecond", "ms")
        .alias("milliseconds", "ms")
        .alias("μs", "us")
        .alias("minute", "min")
        .alias("minutes", "min")
        .alias("hr", "h")
        .alias("hour", "h")
        .alias("hours", "h")
        .alias("day", "d")
        .alias("days", "d")
        .alias("week", "wk")
        .alias("weeks", "wk")
        .alias("month", "mo")
        .alias("months", "mo")
        .alias("y", "yr")
        .alias("year", "yr")
        .alias("years", "yr")
}

fn speed_units() -> TableBuilder {
    ConversionTable::builder()
        .unit("m/s", 1.0)
        .unit("km/h", 1000.0 / 3600.0)
        .unit("mph", 0.447_04)
        .unit("ft/s", 0.3048)
        .unit("kn", 1852.0 / 3600.0)
        .unit("c", 299_792_458.0)
        .alias("kph", "km/h")
        .alias("kmh", "km/h")
        .alias("fps", "ft/s")
        .alias("knot", "kn")
        .alias("knots", "kn")
}

fn acceleration_units() -> TableBuilder {
    ConversionTable::builder()
        .unit("m/s2", 1.0)
        .unit("g0", 9.806_65)
        .unit("ft/s2", 0.3048)
        .unit("Gal", 0.01)
        .alias("m/s²", "m/s2")
        .alias("ft/s²", "ft/s2")
        .alias("gee", "g0")
}

fn force_units() -> TableBuilder {
    ConversionTable::builder()
        .unit("N", 1.0)
        .unit("kN", 1000.0)
        .unit("mN", 0.001)
        .unit("dyn", 1e-5)
        .unit("lbf", 4.448_221_615_260_5)
        .unit("kgf", 9.806_65)
        .alias("newton", "N")
        .alias("newtons", "N")
}

fn energy_units() -> TableBuilder {
    ConversionTable::builder()
        .unit("J", 1.0)
        .unit("kJ", 1000.0)
        .unit("MJ", 1e6)
        .unit("GJ", 1e9)
        .unit("mJ", 0.001)
        .unit("cal", 4.184)
        .unit("kcal", 4184.0)
        .unit("Wh", 3600.0)
        .unit("kWh", 3.6e6)
        .unit("eV", 1.602_176_634e-19)
        .unit("BTU", 1055.055_852_62)
        .unit("erg", 1e-7)
        .unit("ftlb", 1.355_817_948_331_4)
        .alias("joule", "J")
        .alias("joules", "J")
        .alias("calorie", "cal")
        .alias("calories", "cal")
        .alias("Cal", "kcal")
        .alias("kilocalorie", "kcal")
        .alias("kilocalories", "kcal")
}

fn power_units() -> TableBuilder {
    ConversionTable::builder()
        .unit("W", 1.0)
        .unit("kW", 1000.0)
        .unit("MW", 1e6)
        .unit("GW", 1e9)
        .unit("mW", 0.001)
        .unit("hp", 745.699_872)
        .unit("PS", 735.498_75)
        .alias("watt", "W")
        .alias("watts", "W")
        .alias("horsepower", "hp")
}

fn pressure_units() -> TableBuilder {
    ConversionTable::builder()
        .unit("Pa", 1.0)
        .unit("hPa", 100.0)
        .unit("kPa", 1000.0)
        .unit("MPa", 1e6)
        .unit("bar", 100_000.0)
        .unit("mbar", 100.0)
        .unit("atm", 101_325.0)
        .unit("psi", 6894.757_293_168)
        .unit("mmHg", 133.322_387_415)
        .unit("torr", 101_325.0 / 760.0)
        .unit("inHg", 3386.389)
        .alias("pascal", "Pa")
        .alias("pascals", "Pa")
        .alias("atmosphere", "atm")
        .alias("atmospheres", "atm")
}

fn frequency_units() -> TableBuilder {
    ConversionTable::builder()
        .unit("Hz", 1.0)
        .unit("kHz", 1000.0)
        .unit("MHz", 1e6)
        .unit("GHz", 1e9)
        .unit("THz", 1e12)
        .unit("rpm", 1.0 / 60.0)
        .alias("hertz", "Hz")
}

fn data_units() -> TableBuilder {
    ConversionTable::builder()
        .unit("bit", 1.0)
        .unit("byte", 8.0)
        // Decimal (SI)
        .unit("kB", 8e3)
        .unit("MB", 8e6)
        .unit("GB", 8e9)
        .unit("TB", 8e12)
        // Binary (IEC)
        .unit("KiB", 8.0 * 1024.0)
        .unit("MiB", 8.0 * 1024.0 * 1024.0)
        .unit("GiB", 8.0 * 1024.0 * 1024.0 * 1024.0)
        .unit("TiB", 8.0 * 1024.0 * 1024.0 * 1024.0 * 1024.0)
        .alias("bits", "bit")
        .alias("B", "byte")
        .alias("bytes", "byte")
        .alias("kilobyte", "kB")
        .alias("kilobytes", "kB")
        .alias("megabyte", "MB")
        .alias("megabytes", "MB")
        .alias("gigabyte", "GB")
        .alias("gigabytes", "GB")
        .alias("terabyte", "TB")
        .alias("terabytes", "TB")
}

fn angle_units() -> TableBuilder {
    use std::f64::consts::PI;

    ConversionTable::builder()
        .unit("rad", 1.0)
        .unit("deg", PI / 180.0)
        .unit("grad", PI / 200.0)
        .unit("arcmin", PI / 10_800.0)
        .unit("arcsec", PI / 648_000.0)
        .unit("turn", 2.0 * PI)
        .alias("radian", "rad")
        .alias("radians", "rad")
        .alias("degree", "deg")
        .alias("degrees", "deg")
        .alias("°", "deg")
        .alias("gon", "grad")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_core::convert;

    fn table(category: Category) -> CategoryTable {
        builtin_table(category).unwrap()
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_every_builtin_builds() {
        for category in Category::ALL {
            let t = table(category);
            assert_eq!(t.name(), category.name());
            assert_eq!(t.table().multiplier(category.common_unit()), Some(1.0));
        }
    }

    #[test]
    fn test_length_conversions() {
        let t = table(Category::Length);
        assert_eq!(convert(1.0, "km", "m", t.table()).unwrap(), 1000.0);
        assert!(approx_eq(convert(1.0, "mi", "ft", t.table()).unwrap(), 5280.0));
        assert!(approx_eq(convert(12.0, "in", "ft", t.table()).unwrap(), 1.0));
    }

    #[test]
    fn test_mass_conversions() {
        let t = table(Category::Mass);
        assert!(approx_eq(convert(1.0, "lb", "oz", t.table()).unwrap(), 16.0));
        assert!(approx_eq(convert(14.0, "lb", "st", t.table()).unwrap(), 1.0));
    }

    #[test]
    fn test_volume_conversions() {
        let t = table(Category::Volume);
        assert!(approx_eq(convert(1.0, "gal", "qt", t.table()).unwrap(), 4.0));
        assert!(approx_eq(convert(1.0, "m3", "L", t.table()).unwrap(), 1000.0));
        assert!(approx_eq(convert(3.0, "tsp", "tbsp", t.table()).unwrap(), 1.0));
    }

    #[test]
    fn test_time_and_data() {
        let time = table(Category::Time);
        assert_eq!(convert(1.0, "d", "h", time.table()).unwrap(), 24.0);

        let data = table(Category::Data);
        assert_eq!(convert(1.0, "MiB", "KiB", data.table()).unwrap(), 1024.0);
        assert_eq!(convert(1.0, "kB", "byte", data.table()).unwrap(), 1000.0);
    }

    #[test]
    fn test_speed_and_angle() {
        let speed = table(Category::Speed);
        assert!(approx_eq(convert(36.0, "km/h", "m/s", speed.table()).unwrap(), 10.0));

        let angle = table(Category::Angle);
        assert!(approx_eq(convert(180.0, "deg", "rad", angle.table()).unwrap(), std::f64::consts::PI));
        assert!(approx_eq(convert(1.0, "turn", "deg", angle.table()).unwrap(), 360.0));
    }

    #[test]
    fn test_aliases_match_symbols() {
        let t = table(Category::Length);
        let by_symbol = convert(3.0, "mi", "km", t.table()).unwrap();
        let by_alias = convert(3.0, "miles", "kilometers", t.table()).unwrap();
        assert_eq!(by_symbol, by_alias);
    }
}
