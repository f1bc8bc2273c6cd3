macro_rules! versions {
    ($($variant:ident => ($major:literal, $minor:literal),)*) => {
        /// Core profile tiers, oldest first.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Version {
            $($variant,)*
        }

        impl Version {
            pub const ALL: &'static [Version] = &[$(Version::$variant,)*];
            pub const COUNT: usize = Version::ALL.len();

            #[inline]
            pub const fn major(self) -> u32 {
                match self {
                    $(Version::$variant => $major,)*
                }
            }

            #[inline]
            pub const fn minor(self) -> u32 {
                match self {
                    $(Version::$variant => $minor,)*
                }
            }

            /// Registry name, `GL_VERSION_3_3`.
            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Version::$variant => concat!("GL_VERSION_", $major, "_", $minor),)*
                }
            }
        }
    };
}

versions! {
    V1_0 => (1, 0),
    V1_1 => (1, 1),
    V1_2 => (1, 2),
    V1_3 => (1, 3),
    V1_4 => (1, 4),
    V1_5 => (1, 5),
    V2_0 => (2, 0),
    V2_1 => (2, 1),
    V3_0 => (3, 0),
    V3_1 => (3, 1),
    V3_2 => (3, 2),
    V3_3 => (3, 3),
    V4_0 => (4, 0),
    V4_1 => (4, 1),
    V4_2 => (4, 2),
    V4_3 => (4, 3),
    V4_4 => (4, 4),
    V4_5 => (4, 5),
    V4_6 => (4, 6),
}

impl Version {
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Whether a context reporting `major.minor` provides this tier.
    #[inline]
    pub const fn is_supported_by(self, major: u32, minor: u32) -> bool {
        (major == self.major() && minor >= self.minor()) || major > self.major()
    }

    pub fn from_name(name: &str) -> Option<Version> {
        Version::ALL.iter().copied().find(|version| version.name() == name)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{}", self.major(), self.minor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_follow_registry() {
        assert_eq!(Version::V1_0.name(), "GL_VERSION_1_0");
        assert_eq!(Version::V3_3.name(), "GL_VERSION_3_3");
        assert_eq!(Version::V4_6.name(), "GL_VERSION_4_6");
        assert_eq!(Version::from_name("GL_VERSION_2_1"), Some(Version::V2_1));
        assert_eq!(Version::from_name("GL_VERSION_9_9"), None);
    }

    #[test]
    fn test_tiers_are_ordered() {
        assert_eq!(Version::COUNT, 19);
        for pair in Version::ALL.windows(2) {
            assert!(
                (pair[0].major(), pair[0].minor()) < (pair[1].major(), pair[1].minor())
            );
        }
        for (position, version) in Version::ALL.iter().enumerate() {
            assert_eq!(version.index(), position);
        }
    }

    #[test]
    fn test_is_supported_by() {
        assert!(Version::V3_3.is_supported_by(3, 3));
        assert!(Version::V3_3.is_supported_by(3, 5));
        assert!(Version::V3_3.is_supported_by(4, 0));
        assert!(!Version::V3_3.is_supported_by(3, 2));
        assert!(!Version::V3_3.is_supported_by(2, 9));
        assert!(!Version::V1_0.is_supported_by(0, 0));
    }
}
