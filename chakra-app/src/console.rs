//! Operator console: the single synchronous event source driving the
//! simulator, standing where the dashboard's click handlers stood.
//!
//! One line in, one textual response out. Unknown commands print usage;
//! nothing here panics or propagates errors — bad input degrades to a
//! message, exactly like the pipeline underneath it.

use crate::components::ChakraStack;
use chakra_core::i18n::Language;
use chakra_safety::AnomalyKind;
use chakra_vision::VoiceCommand;

const USAGE: &str = "\
commands:
  devices                 list the node inventory
  select <id>             select a node for anomaly simulation
  deselect                clear the selection
  anomaly <kind>          hidden | broken | fire | theft (needs a selection)
  honeypot                deploy a Deception Cube
  interlocks              list response interlocks
  toggle <id>             arm/disarm an interlock
  log                     show the operational log stream
  alerts                  show structured security alerts
  ptz [move]              show PTZ state, or nudge: up down left right in out reset
  voice on|off            toggle the voice-command stream
  say <phrase>            feed a transcribed phrase to the voice parser
  lang en|hi              switch interface language
  status                  simulator status summary
  quit                    exit";

pub struct CommandResult {
    pub output: String,
    pub quit: bool,
}

impl CommandResult {
    fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }
}

pub struct Console {
    stack: ChakraStack,
    selected: Option<String>,
}

impl Console {
    pub fn new(stack: ChakraStack) -> Self {
        Self {
            stack,
            selected: None,
        }
    }

    pub fn stack(&self) -> &ChakraStack {
        &self.stack
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn handle_line(&mut self, line: &str) -> CommandResult {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return CommandResult::text("");
        };
        let rest: Vec<&str> = parts.collect();

        match (command.to_lowercase().as_str(), rest.as_slice()) {
            ("help", _) => CommandResult::text(USAGE),
            ("quit", _) | ("exit", _) => CommandResult {
                output: "Shutting down.".into(),
                quit: true,
            },
            ("devices", _) => self.list_devices(),
            ("select", [id]) => self.select(id),
            ("deselect", _) => {
                self.selected = None;
                CommandResult::text("Selection cleared.")
            }
            ("anomaly", [kind]) => self.anomaly(kind),
            ("honeypot", _) => self.honeypot(),
            ("interlocks", _) => self.list_interlocks(),
            ("toggle", [id]) => {
                let Some(interlocks) = &self.stack.interlocks else {
                    return CommandResult::text("Safety layer disabled.");
                };
                match interlocks.toggle(id) {
                    Some(active) => CommandResult::text(format!(
                        "Interlock {} is now {}.",
                        id,
                        if active { "ARMED" } else { "DISARMED" }
                    )),
                    None => CommandResult::text(format!("No interlock '{}'.", id)),
                }
            }
            ("log", _) => {
                let entries = self.stack.oplog.entries();
                if entries.is_empty() {
                    CommandResult::text("Log stream empty.")
                } else {
                    CommandResult::text(entries.join("\n"))
                }
            }
            ("alerts", _) => self.list_alerts(),
            ("ptz", args) => self.ptz(args),
            ("voice", [state]) => self.voice_toggle(state),
            ("say", phrase) if !phrase.is_empty() => self.say(&phrase.join(" ")),
            ("lang", [code]) => match Language::parse(code) {
                Some(lang) => {
                    self.stack.set_language(lang);
                    CommandResult::text(format!("Language set to {}.", lang.tag()))
                }
                None => CommandResult::text("Supported languages: en, hi."),
            },
            ("status", _) => self.status(),
            _ => CommandResult::text(USAGE),
        }
    }

    fn list_devices(&self) -> CommandResult {
        let lines: Vec<String> = self
            .stack
            .registry
            .devices()
            .iter()
            .map(|d| {
                let marker = if Some(d.id.as_str()) == self.selected() {
                    ">"
                } else {
                    " "
                };
                let trap = if d.is_honeypot { " [TRAP]" } else { "" };
                format!(
                    "{} {:<12} {:<22} {:<10} {:<11} hw:{:>3} scene:{:>3}{}",
                    marker,
                    d.id,
                    d.name,
                    d.kind.label(),
                    d.status.label(),
                    d.hardware_health.map_or("-".into(), |h| h.to_string()),
                    d.scene_integrity.map_or("-".into(), |s| s.to_string()),
                    trap
                )
            })
            .collect();
        CommandResult::text(lines.join("\n"))
    }

    fn select(&mut self, id: &str) -> CommandResult {
        match self.stack.registry.get(id) {
            Some(d) => {
                self.selected = Some(d.id.clone());
                CommandResult::text(format!("Selected {} ({}).", d.name, d.id))
            }
            None => CommandResult::text(format!("No device '{}'.", id)),
        }
    }

    fn anomaly(&mut self, kind: &str) -> CommandResult {
        let Some(dispatcher) = &self.stack.dispatcher else {
            return CommandResult::text("Safety layer disabled.");
        };
        let Some(kind) = AnomalyKind::parse(kind) else {
            return CommandResult::text("Anomaly kinds: hidden, broken, fire, theft.");
        };
        let Some(id) = self.selected.clone() else {
            return CommandResult::text("No node selected.");
        };
        match dispatcher.dispatch(kind, &id) {
            Some(d) => CommandResult::text(format!(
                "{} applied to {}: status={}, hw={}, scene={}.",
                kind.label(),
                d.name,
                d.status.label(),
                d.hardware_health.map_or("-".into(), |h| h.to_string()),
                d.scene_integrity.map_or("-".into(), |s| s.to_string()),
            )),
            None => CommandResult::text("Selected node vanished from the registry."),
        }
    }

    fn honeypot(&self) -> CommandResult {
        match &self.stack.deployer {
            Some(deployer) => {
                let decoy = deployer.deploy();
                CommandResult::text(format!("Deployed {} at {} ({}).", decoy.name, decoy.ip, decoy.id))
            }
            None => CommandResult::text("Deception layer disabled."),
        }
    }

    fn list_interlocks(&self) -> CommandResult {
        let Some(interlocks) = &self.stack.interlocks else {
            return CommandResult::text("Safety layer disabled.");
        };
        let lines: Vec<String> = interlocks
            .interlocks()
            .iter()
            .map(|i| {
                format!(
                    "{:<6} {:<16} -> {:<16} on {:<9} [{}]",
                    i.id,
                    i.trigger,
                    i.action,
                    i.device_type,
                    if i.is_active { "ARMED" } else { "off" }
                )
            })
            .collect();
        CommandResult::text(lines.join("\n"))
    }

    fn list_alerts(&self) -> CommandResult {
        let Some(buffer) = &self.stack.alerts else {
            return CommandResult::text("Safety layer disabled.");
        };
        let alerts = buffer.alerts();
        if alerts.is_empty() {
            return CommandResult::text("No structured alerts.");
        }
        let lines: Vec<String> = alerts
            .iter()
            .map(|a| {
                let mitre = a
                    .mitre
                    .as_ref()
                    .map(|m| format!(" [{}]", m.technique_id))
                    .unwrap_or_default();
                format!(
                    "#{:<4} {:?} {} on device {}{} — {}",
                    a.id, a.severity, a.alert_type, a.device_id, mitre, a.description
                )
            })
            .collect();
        CommandResult::text(lines.join("\n"))
    }

    fn ptz(&self, args: &[&str]) -> CommandResult {
        let Some(voice) = &self.stack.voice else {
            return CommandResult::text("Vision layer disabled.");
        };
        let nudge = match args {
            [] => {
                let p = voice.ptz();
                return CommandResult::text(format!(
                    "PTZ pan={:.0} tilt={:.0} zoom={:.1}",
                    p.pan, p.tilt, p.zoom
                ));
            }
            ["left"] => VoiceCommand::PanLeft,
            ["right"] => VoiceCommand::PanRight,
            ["up"] => VoiceCommand::TiltUp,
            ["down"] => VoiceCommand::TiltDown,
            ["in"] => VoiceCommand::ZoomIn,
            ["out"] => VoiceCommand::ZoomOut,
            ["reset"] => VoiceCommand::Reset,
            _ => return CommandResult::text("ptz moves: up down left right in out reset"),
        };
        voice.nudge(nudge);
        let p = voice.ptz();
        CommandResult::text(format!(
            "PTZ pan={:.0} tilt={:.0} zoom={:.1}",
            p.pan, p.tilt, p.zoom
        ))
    }

    fn voice_toggle(&self, state: &str) -> CommandResult {
        let Some(voice) = &self.stack.voice else {
            return CommandResult::text("Vision layer disabled.");
        };
        match state {
            "on" => {
                voice.set_listening(true);
                CommandResult::text("Sentinel listening.")
            }
            "off" => {
                voice.set_listening(false);
                CommandResult::text("Voice control offline.")
            }
            _ => CommandResult::text("voice on|off"),
        }
    }

    fn say(&self, phrase: &str) -> CommandResult {
        let Some(voice) = &self.stack.voice else {
            return CommandResult::text("Vision layer disabled.");
        };
        match voice.handle_phrase(phrase) {
            Some(cmd) => {
                let p = voice.ptz();
                CommandResult::text(format!(
                    "{:?} -> pan={:.0} tilt={:.0} zoom={:.1}",
                    cmd, p.pan, p.tilt, p.zoom
                ))
            }
            None if !voice.is_listening() => {
                CommandResult::text("Voice control is offline; 'voice on' first.")
            }
            None => CommandResult::text("Unrecognized phrase."),
        }
    }

    fn status(&self) -> CommandResult {
        let analyst = self
            .stack
            .session
            .active_session()
            .map(|a| format!("{} ({})", a.name, a.role))
            .unwrap_or_else(|| "none".into());
        let armed = self
            .stack
            .interlocks
            .as_ref()
            .map(|t| {
                format!(
                    "{}/{}",
                    t.interlocks().iter().filter(|i| i.is_active).count(),
                    t.len()
                )
            })
            .unwrap_or_else(|| "off".into());
        let fire = self
            .stack
            .dispatcher
            .as_ref()
            .map_or("off", |d| {
                if d.fire_heatmap_active() {
                    "ACTIVE"
                } else {
                    "inactive"
                }
            });
        let alerts = self
            .stack
            .alerts
            .as_ref()
            .map(|a| a.len().to_string())
            .unwrap_or_else(|| "off".into());
        CommandResult::text(format!(
            "analyst: {}\ndevices: {} ({} decoys)\ninterlocks armed: {}\nfire heatmap: {}\nlog lines: {}\nalerts: {}\nselected: {}",
            analyst,
            self.stack.registry.device_count(),
            self.stack.registry.honeypots().len(),
            armed,
            fire,
            self.stack.oplog.len(),
            alerts,
            self.selected().unwrap_or("none"),
        ))
    }
}
