//! Prefabricated bodies and scenes.

pub mod bodies {
    use simulator::bodies::Body;

    /// Returns the Earth. Its equatorial radius is also the biggest projectile allowed.
    pub fn earth() -> Body {
        Body {
            radius: 6_378_100f64,
            name: "Earth".to_string(),
            color: 0x3669FF,   // blue
            outline: 0x56FF2D, // green
        }
    }

    /// Returns our Moon.
    /// Does not come with Wire.
    pub fn luna() -> Body {
        Body {
            radius: 1_737_400f64,
            name: "Luna".to_string(),
            color: 0x3c3a38,   // dark gray,
            outline: 0xadaca9, // light gray,
        }
    }

    /// Returns Mars
    pub fn mars() -> Body {
        Body {
            radius: 3_389_500f64,
            name: "Mars".to_string(),
            color: 0xff5c26,   // red-orange
            outline: 0xc9af9e, // gray
        }
    }

    pub fn phobos() -> Body {
        moon("Phobos", 11_100f64)
    }

    pub fn deimos() -> Body {
        moon("Deimos", 6_300f64)
    }

    /// Returns Venus.
    pub fn venus() -> Body {
        Body {
            radius: 6_051_800f64,
            name: "Venus".to_string(),
            color: 0xfcd172,   // gray yellow
            outline: 0xaf5a23, // brown
        }
    }

    /// Returns Mercury.
    pub fn mercury() -> Body {
        Body {
            radius: 2_439_700f64,
            name: "Mercury".to_string(),
            color: 0xa79ea1,   // light gray
            outline: 0x737375, // dark gray
        }
    }

    /// Returns Jupiter. Good luck.
    pub fn jupiter() -> Body {
        Body {
            radius: 69_911_000f64,
            name: "Jupiter".to_string(),
            color: 0x977569,   // bruisey brown
            outline: 0x8b5b45, // brown red
        }
    }

    /// A generic lumpy gray moon.
    fn moon(name: &str, radius: f64) -> Body {
        Body {
            radius,
            name: name.to_string(),
            color: 0x5566bb, // dark gray-blue
            outline: 0xeeddee,
        }
    }
}

pub mod scenes {
    use super::bodies;
    use crate::builder::SceneBuilder;

    /// The classic: a rock flies at the Earth, with the Moon looking on.
    pub fn earth_impact() -> SceneBuilder {
        let mut builder = SceneBuilder::new(bodies::earth());
        builder.satellite(Some(bodies::luna()));
        builder
    }

    /// Same thing at Mars. Smaller planet, so the same rock looks (and moves) bigger.
    pub fn mars_impact() -> SceneBuilder {
        let mut builder = SceneBuilder::new(bodies::mars());
        builder.satellite(Some(bodies::phobos())).projectile(50_000.0, 100_000.0);
        builder
    }
}
