//! Logical LED and display-state model.
//!
//! The board carries eight LEDs split across two output ports: `Led1`
//! through `Led6` sit on the six-bit ring port, `Led7` and `Led8` on the
//! ends port. Pattern code names LEDs by identifier and composes whole
//! [`Frame`]s; the raw bit assignments live here and nowhere else.

/// The two output ports driving LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    /// Six-LED ring, bits 0..=5.
    Ring,
    /// Two end LEDs, bits 0 and 5.
    Ends,
}

/// The eight LEDs, numbered as on the board silkscreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Led {
    Led1,
    Led2,
    Led3,
    Led4,
    Led5,
    Led6,
    Led7,
    Led8,
}

/// Ring-port bits that carry LEDs.
pub const RING_MASK: u8 = 0x3f;

/// Ends-port bits that carry LEDs. The gap between them holds the switch
/// inputs and unused pins.
pub const ENDS_MASK: u8 = 0x21;

impl Led {
    /// Every LED, in silkscreen order.
    pub const ALL: [Led; 8] = [
        Led::Led1,
        Led::Led2,
        Led::Led3,
        Led::Led4,
        Led::Led5,
        Led::Led6,
        Led::Led7,
        Led::Led8,
    ];

    /// Port this LED is wired to.
    pub const fn port(self) -> Port {
        match self {
            Led::Led7 | Led::Led8 => Port::Ends,
            _ => Port::Ring,
        }
    }

    /// Bit mask within this LED's own port.
    pub const fn mask(self) -> u8 {
        match self {
            Led::Led1 => 0x01,
            Led::Led2 => 0x02,
            Led::Led3 => 0x04,
            Led::Led4 => 0x08,
            Led::Led5 => 0x10,
            Led::Led6 => 0x20,
            Led::Led7 => 0x01,
            Led::Led8 => 0x20,
        }
    }
}

/// Full display state, one bit field per port, bit set = LED lit.
///
/// Frames are only ever composed from the eight LED masks; electrical
/// polarity is the output driver's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub ring: u8,
    pub ends: u8,
}

impl Frame {
    /// Everything dark.
    pub const OFF: Frame = Frame { ring: 0, ends: 0 };

    /// All eight LEDs lit.
    pub const ALL: Frame = Frame {
        ring: RING_MASK,
        ends: ENDS_MASK,
    };

    /// Frame with exactly the given LEDs lit.
    pub const fn lit(leds: &[Led]) -> Frame {
        let mut frame = Frame::OFF;
        let mut i = 0;
        while i < leds.len() {
            frame = frame.with(leds[i]);
            i += 1;
        }
        frame
    }

    /// Copy of this frame with one more LED lit.
    pub const fn with(self, led: Led) -> Frame {
        match led.port() {
            Port::Ring => Frame {
                ring: self.ring | led.mask(),
                ends: self.ends,
            },
            Port::Ends => Frame {
                ring: self.ring,
                ends: self.ends | led.mask(),
            },
        }
    }

    /// Whether the given LED is lit in this frame.
    pub const fn contains(self, led: Led) -> bool {
        let bits = match led.port() {
            Port::Ring => self.ring,
            Port::Ends => self.ends,
        };
        bits & led.mask() != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_stay_within_their_ports() {
        for led in Led::ALL {
            let port_mask = match led.port() {
                Port::Ring => RING_MASK,
                Port::Ends => ENDS_MASK,
            };
            assert_eq!(led.mask() & !port_mask, 0, "{:?}", led);
        }
    }

    #[test]
    fn masks_are_unique_per_port() {
        for a in Led::ALL {
            for b in Led::ALL {
                if a != b && a.port() == b.port() {
                    assert_ne!(a.mask(), b.mask(), "{:?} vs {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn lit_composes_and_contains_reads_back() {
        let frame = Frame::lit(&[Led::Led1, Led::Led4, Led::Led7, Led::Led8]);
        assert_eq!(frame.ring, 0x09);
        assert_eq!(frame.ends, 0x21);
        assert!(frame.contains(Led::Led1));
        assert!(frame.contains(Led::Led8));
        assert!(!frame.contains(Led::Led2));
    }

    #[test]
    fn all_frame_covers_every_led() {
        for led in Led::ALL {
            assert!(Frame::ALL.contains(led));
        }
        for led in Led::ALL {
            assert!(!Frame::OFF.contains(led));
        }
    }
}
