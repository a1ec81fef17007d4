// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Trackademic CLI entrypoint.
//!
//! By default this runs the terminal shell against the built-in demo page and a canned
//! API client. Use `--api-base` to point the stats poller and the search box at a live
//! backend instead.

use std::error::Error;

use trackademic::api::{ApiClient, HttpApi};
use trackademic::app::App;
use trackademic::tui;

const DEFAULT_PATH: &str = "/informes/";
const DEFAULT_VIEWPORT_PX: f32 = 1300.0;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--demo] [--path <route>] [--viewport <px>]\n  {program} --api-base <url> [--path <route>] [--viewport <px>]\n\n--demo (the default) uses the built-in page and canned data; it cannot be combined\nwith --api-base.\n--api-base points the realtime-stats poller and the search box at a live server\norigin, e.g. http://localhost:8000.\n--path sets the current route; routes containing /informes/ arm the stats poller\n(default {DEFAULT_PATH}).\n--viewport sets the initial viewport width in CSS pixels (default {DEFAULT_VIEWPORT_PX})."
    );
}

#[derive(Debug, Default, Clone, PartialEq)]
struct CliOptions {
    demo: bool,
    api_base: Option<String>,
    path: Option<String>,
    viewport: Option<f32>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--api-base" => {
                if options.api_base.is_some() {
                    return Err(());
                }
                let base = args.next().ok_or(())?;
                options.api_base = Some(base);
            }
            "--path" => {
                if options.path.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.path = Some(path);
            }
            "--viewport" => {
                if options.viewport.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let px: f32 = raw.parse().map_err(|_| ())?;
                if !px.is_finite() || px <= 0.0 {
                    return Err(());
                }
                options.viewport = Some(px);
            }
            _ => return Err(()),
        }
    }

    if options.demo && options.api_base.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    env_logger::init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "trackademic".to_owned());
    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    let result = (|| -> Result<(), Box<dyn Error>> {
        let api: Box<dyn ApiClient> = match &options.api_base {
            Some(base) => Box::new(HttpApi::new(base.clone())?),
            None => Box::new(tui::CannedApi::new()),
        };
        let viewport = options.viewport.unwrap_or(DEFAULT_VIEWPORT_PX);
        let path = options.path.clone().unwrap_or_else(|| DEFAULT_PATH.to_owned());

        let doc = tui::demo_document(viewport);
        let app = App::new(doc, path, api, 0);
        tui::run(app)
    })();

    if let Err(err) = result {
        eprintln!("trackademic: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn defaults_to_empty_options() {
        assert_eq!(parse(&[]), Ok(CliOptions::default()));
    }

    #[test]
    fn accepts_api_base_with_route_and_viewport() {
        let options = parse(&[
            "--api-base",
            "http://localhost:8000",
            "--path",
            "/informes/anual",
            "--viewport",
            "900",
        ])
        .expect("options");
        assert_eq!(options.api_base.as_deref(), Some("http://localhost:8000"));
        assert_eq!(options.path.as_deref(), Some("/informes/anual"));
        assert_eq!(options.viewport, Some(900.0));
    }

    #[test]
    fn rejects_demo_combined_with_api_base() {
        assert!(parse(&["--demo", "--api-base", "http://localhost:8000"]).is_err());
    }

    #[test]
    fn rejects_duplicate_and_unknown_flags() {
        assert!(parse(&["--demo", "--demo"]).is_err());
        assert!(parse(&["--nope"]).is_err());
        assert!(parse(&["--viewport", "-5"]).is_err());
        assert!(parse(&["--viewport"]).is_err());
    }
}
