//! Static frames for the `/ascii/rave` animation.
//!
//! The chicken sways right, back to centre, then left and home again, so
//! looping the frames in order gives a continuous dance.

use crate::config::constants::RAVE_FPS;
use crate::models::RaveResponse;

pub static RAVE_FRAMES: [&str; 10] = [
    r"
       \\
       (o>
    \\_//)
     \_/_)
      _|_
",
    r"
         \\
         (o>
      \\_//)
       \_/_)
        _|_
",
    r"
           \\
           (o>
        \\_//)
         \_/_)
          _|_
",
    r"
         \\
         (o>
      \\_//)
       \_/_)
        _|_
",
    r"
       \\
       (o>
    \\_//)
     \_/_)
      _|_
",
    r"
     \\
     (o>
  \\_//)
   \_/_)
    _|_
",
    r"
   \\
   (o>
\\_//)
 \_/_)
  _|_
",
    r"
     \\
     (o>
  \\_//)
   \_/_)
    _|_
",
    r"
       \\
       (o>
    \\_//)
     \_/_)
      _|_
",
    r"
         \\
         (o>
      \\_//)
       \_/_)
        _|_
",
];

pub static SCREAMING_CHICKEN: &str = r"
    \\
    (O>  BAWK!
 \\_//)
  \_/_)
   _|_
";

/// The full rave payload
pub fn rave() -> RaveResponse {
    RaveResponse {
        frames: &RAVE_FRAMES,
        screaming_chicken: SCREAMING_CHICKEN,
        frame_count: RAVE_FRAMES.len(),
        recommended_fps: RAVE_FPS,
    }
}
