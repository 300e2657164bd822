//! Raw mode: no echo, no line buffering, so keystrokes don't scribble over
//! the frame. Signals (Ctrl-C) still work.
//!
//! The mode is a handle: [`RawMode::enable`] saves the current settings and
//! [`RawMode::restore`] (or dropping the handle) puts them back.

#[cfg(unix)]
mod imp {
    use std::{
        io,
        mem::MaybeUninit,
        os::unix::io::{AsRawFd, RawFd},
    };

    use tracing::{debug, warn};

    pub struct RawMode {
        fd: RawFd,
        saved: libc::termios,
        active: bool,
    }

    impl RawMode {
        pub fn enable() -> io::Result<Self> {
            let fd = io::stdin().as_raw_fd();
            let mut t = MaybeUninit::<libc::termios>::uninit();
            // SAFETY: tcgetattr fully initialises `t` when it returns 0.
            let saved = unsafe {
                if libc::tcgetattr(fd, t.as_mut_ptr()) != 0 {
                    return Err(io::Error::last_os_error());
                }
                t.assume_init()
            };

            let mut quiet = saved;
            quiet.c_lflag &= !(libc::ICANON | libc::ECHO);
            // SAFETY: `quiet` is a valid termios copied from the driver.
            if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &quiet) } != 0 {
                return Err(io::Error::last_os_error());
            }
            debug!(fd, "raw mode on");
            Ok(Self {
                fd,
                saved,
                active: true,
            })
        }

        pub fn restore(mut self) -> io::Result<()> {
            self.reset()
        }

        fn reset(&mut self) -> io::Result<()> {
            if !self.active {
                return Ok(());
            }
            self.active = false;
            // SAFETY: `saved` came from tcgetattr on the same fd.
            if unsafe { libc::tcsetattr(self.fd, libc::TCSANOW, &self.saved) } != 0 {
                return Err(io::Error::last_os_error());
            }
            debug!(fd = self.fd, "raw mode off");
            Ok(())
        }
    }

    impl Drop for RawMode {
        fn drop(&mut self) {
            if let Err(e) = self.reset() {
                warn!(error = %e, "failed to restore terminal mode");
            }
        }
    }
}

#[cfg(not(unix))]
mod imp {
    use std::io;

    /// Console input on this platform is left as-is.
    pub struct RawMode;

    impl RawMode {
        pub fn enable() -> io::Result<Self> {
            Ok(Self)
        }

        pub fn restore(self) -> io::Result<()> {
            Ok(())
        }
    }
}

pub use imp::RawMode;
