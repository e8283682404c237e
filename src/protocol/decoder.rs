use super::command::Command;
use super::session::Session;
use crate::game::error::Error;
use crate::players::policy::Policy;
use std::io::BufRead;
use std::io::Write;

/// the blocking engine loop. one line is fully processed before the next
/// is read: state updates are silent, action events run the policy and
/// write exactly one `place_disc` reply. a fault on a single line is
/// logged and skipped so later lines still get through.
pub struct Decoder<P> {
    session: Session,
    policy: P,
}

impl<P: Policy> Decoder<P> {
    pub fn new(policy: P) -> Self {
        Self {
            session: Session::new(),
            policy,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// read until end of stream. returns Err only on broken io; protocol
    /// faults never escape a single line.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        for line in input.lines() {
            self.step(&line?, &mut output)?;
        }
        Ok(())
    }

    fn step<W: Write>(&mut self, line: &str, output: &mut W) -> std::io::Result<()> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(fault) => {
                log::warn!("skipping line {:?}: {}", line, fault);
                return Ok(());
            }
        };
        match command {
            Command::Noop => {}
            Command::Round(n) => self.session.advance(n),
            Command::Settings { key, value } => {
                if let Err(fault) = self.session.configure(&key, &value) {
                    log::warn!("skipping setting {:?}: {}", key, fault);
                }
            }
            Command::Field(field) => {
                if let Err(fault) = self.session.refresh(&field) {
                    log::warn!("skipping field update: {}", fault);
                }
            }
            Command::Action { millis } => {
                self.session.arm(millis);
                self.act(output)?;
            }
        }
        Ok(())
    }

    fn act<W: Write>(&mut self, output: &mut W) -> std::io::Result<()> {
        match self.policy.choose(&self.session) {
            Ok(column) => {
                log::debug!("place_disc {}", column);
                writeln!(output, "place_disc {}", column)?;
                output.flush()
            }
            Err(Error::NoLegalMove) => {
                log::error!("board is full, engine asked for an impossible move");
                Ok(())
            }
            Err(fault) => {
                log::error!("policy failed: {}", fault);
                Ok(())
            }
        }
    }
}
