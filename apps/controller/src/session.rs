//! Interactive operator session: edit pending values, send, refresh.

use std::io::Write;

use anyhow::Result;
use client_core::{PositionClient, PositionTransport};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    commands::{parse_command, ControllerCommand, ParseCommandError, HELP},
    view,
};

pub async fn run_session<T, R, W>(
    client: &mut PositionClient<T>,
    input: R,
    out: &mut W,
) -> Result<()>
where
    T: PositionTransport,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if let Err(error) = client.refresh_current().await {
        writeln!(out, "refresh failed: {error}")?;
    }
    writeln!(out, "{}", view::render(client.view()))?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match parse_command(&line) {
            Ok(ControllerCommand::Quit) => break,
            Ok(command) => execute(client, command, out).await?,
            Err(ParseCommandError::Empty) => {}
            Err(error) => writeln!(out, "error: {error}")?,
        }
    }
    Ok(())
}

async fn execute<T, W>(
    client: &mut PositionClient<T>,
    command: ControllerCommand,
    out: &mut W,
) -> Result<()>
where
    T: PositionTransport,
    W: Write,
{
    match command {
        ControllerCommand::SetAzimuth(value) => {
            client.update_pending_azimuth(value);
            writeln!(out, "{}", view::new_azimuth_line(value))?;
        }
        ControllerCommand::SetElevation(value) => {
            client.update_pending_elevation(value);
            writeln!(out, "{}", view::new_elevation_line(value))?;
        }
        ControllerCommand::Send => match client.send_pending().await {
            Ok(_) => writeln!(out, "{}", view::render(client.view()))?,
            Err(error) => writeln!(out, "send failed: {error}")?,
        },
        ControllerCommand::Refresh => match client.refresh_current().await {
            Ok(_) => writeln!(out, "{}", view::render(client.view()))?,
            Err(error) => writeln!(out, "refresh failed: {error}")?,
        },
        ControllerCommand::Show => writeln!(out, "{}", view::render(client.view()))?,
        ControllerCommand::Help => writeln!(out, "{HELP}")?,
        ControllerCommand::Quit => {}
    }
    Ok(())
}
