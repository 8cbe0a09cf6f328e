//-
// Copyright (c) 2025, the Smargs developers
//
// This file is part of Smargs.
//
// Smargs is free software: you can  redistribute it and/or modify it under the
// terms of  the GNU General Public  License as published by  the Free Software
// Foundation, either version  3 of the License, or (at  your option) any later
// version.
//
// Smargs is distributed  in the hope that  it will be useful,  but WITHOUT ANY
// WARRANTY; without  even the implied  warranty of MERCHANTABILITY  or FITNESS
// FOR  A PARTICULAR  PURPOSE.  See the  GNU General  Public  License for  more
// details.
//
// You should have received a copy of the GNU General Public License along with
// Smargs. If not, see <http://www.gnu.org/licenses/>.

use std::path::Path;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use super::sysexits::*;

/// The log level for the given number of `-v` flags.
pub fn level_for_verbosity(verbosity: u64) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialise logging.
///
/// If `logging.toml` exists in `config_dir`, it is handed to log4rs as is.
/// Otherwise, everything at or above the level selected by `verbosity` goes
/// to stderr.
pub fn init(config_dir: Option<&Path>, verbosity: u64) -> Result<(), Sysexit> {
    if let Some(log_config_file) = config_dir
        .map(|dir| dir.join("logging.toml"))
        .filter(|file| file.is_file())
    {
        return log4rs::init_file(
            &log_config_file,
            log4rs::file::Deserializers::default(),
        )
        .map_err(|e| {
            eprintln!(
                "Failed to initialise logging from '{}': {}",
                log_config_file.display(),
                e
            );
            EX_CONFIG
        });
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S%.3f)} [{l}][{t}] {m}{n}",
        )))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(
            Root::builder()
                .appender("stderr")
                .build(level_for_verbosity(verbosity)),
        )
        .map_err(|e| {
            eprintln!("Failed to configure logging: {}", e);
            EX_SOFTWARE
        })?;

    log4rs::init_config(config).map(|_| ()).map_err(|e| {
        eprintln!("Failed to initialise logging: {}", e);
        EX_SOFTWARE
    })
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    // This is the only test which installs a logger.
    #[test]
    fn init_from_logging_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("logging.toml"),
            "[appenders.stderr]\n\
             kind = \"console\"\n\
             \n\
             [root]\n\
             level = \"info\"\n\
             appenders = [\"stderr\"]\n",
        )
        .unwrap();

        assert_eq!(Ok(()), init(Some(dir.path()), 0));
    }

    #[test]
    fn bad_logging_toml_is_config_error() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("logging.toml"),
            "[appenders.stderr]\nkind = \"carrier-pigeon\"\n",
        )
        .unwrap();

        assert_eq!(Err(EX_CONFIG), init(Some(dir.path()), 0));
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(LevelFilter::Warn, level_for_verbosity(0));
        assert_eq!(LevelFilter::Info, level_for_verbosity(1));
        assert_eq!(LevelFilter::Debug, level_for_verbosity(2));
        assert_eq!(LevelFilter::Trace, level_for_verbosity(3));
        assert_eq!(LevelFilter::Trace, level_for_verbosity(99));
    }
}
