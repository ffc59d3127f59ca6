//! Building a network from line and interchange definitions.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{debug, trace, warn};

use super::config::{DEFAULT_INTERCHANGE_MINUTES, InterchangeConfig, LineConfig, NetworkConfig};
use super::error::ConfigError;
use super::model::{Interchange, Line, Link, LinkKind, Network, Stop};
use crate::domain::{LineId, StopId, StopKey, normalize_stop_name};

impl Network {
    /// Build a network from a configuration.
    ///
    /// Stops are deduplicated across lines by normalized name: a name
    /// seen on a second line adds that line to the existing stop rather
    /// than creating a new one. Consecutive stops on a line are linked
    /// with the line's travel time. Interchanges between two different
    /// stops become interchange links; an interchange naming the same
    /// stop twice is recorded as a shared stop and adds no link.
    pub fn from_config(config: &NetworkConfig) -> Result<Self, ConfigError> {
        let mut stops: Vec<Stop> = Vec::new();
        let mut index: HashMap<StopKey, StopId> = HashMap::new();
        let mut lines: Vec<Line> = Vec::with_capacity(config.lines.len());
        let mut line_names: HashSet<&str> = HashSet::new();

        for (i, line_config) in config.lines.iter().enumerate() {
            let line_id = LineId(i);
            if !line_names.insert(line_config.name.as_str()) {
                return Err(ConfigError::DuplicateLine {
                    line: line_config.name.clone(),
                });
            }
            let line = add_line(line_id, line_config, &mut stops, &mut index)?;
            debug!(
                line = %line.name,
                stops = line.stops.len(),
                minutes = line.minutes_between_stops,
                "Added line"
            );
            lines.push(line);
        }

        let mut adjacency: Vec<Vec<Link>> = vec![Vec::new(); stops.len()];
        for (i, line) in lines.iter().enumerate() {
            for pair in line.stops.windows(2) {
                connect(
                    &mut adjacency,
                    pair[0],
                    pair[1],
                    line.minutes_between_stops,
                    LinkKind::Ride(LineId(i)),
                );
            }
        }

        let mut interchanges = Vec::with_capacity(config.interchanges.len());
        let mut declared: HashSet<(StopId, StopId)> = HashSet::new();
        for interchange in &config.interchanges {
            let recorded = add_interchange(interchange, &stops, &index, &mut declared)?;
            if let Interchange::Linked { a, b, minutes } = recorded {
                connect(&mut adjacency, a, b, minutes, LinkKind::Interchange);
            }
            interchanges.push(recorded);
        }

        debug!(
            stops = stops.len(),
            lines = lines.len(),
            interchanges = interchanges.len(),
            "Network built"
        );

        Ok(Network {
            stops,
            lines,
            adjacency,
            interchanges,
        })
    }
}

/// Insert a line's stops, reusing stops already seen on earlier lines.
fn add_line(
    line_id: LineId,
    config: &LineConfig,
    stops: &mut Vec<Stop>,
    index: &mut HashMap<StopKey, StopId>,
) -> Result<Line, ConfigError> {
    if config.stops.is_empty() {
        return Err(ConfigError::EmptyLine {
            line: config.name.clone(),
        });
    }

    let mut ids: Vec<StopId> = Vec::with_capacity(config.stops.len());
    for name in &config.stops {
        let key = StopKey::normalize(name).map_err(|reason| ConfigError::EmptyStopName {
            line: config.name.clone(),
            reason,
        })?;

        let id = match index.get(&key) {
            Some(id) => *id,
            None => {
                let id = StopId(stops.len());
                index.insert(key.clone(), id);
                stops.push(Stop {
                    key,
                    lines: BTreeSet::new(),
                });
                id
            }
        };

        if ids.last() == Some(&id) {
            return Err(ConfigError::RepeatedStop {
                line: config.name.clone(),
                stop: stops[id.0].name().to_string(),
            });
        }

        stops[id.0].lines.insert(line_id);
        ids.push(id);
    }

    Ok(Line {
        name: config.name.clone(),
        minutes_between_stops: config.minutes_between_stops,
        stops: ids,
    })
}

/// Resolve both sides of an interchange and decide how it is modelled.
fn add_interchange(
    config: &InterchangeConfig,
    stops: &[Stop],
    index: &HashMap<StopKey, StopId>,
    declared: &mut HashSet<(StopId, StopId)>,
) -> Result<Interchange, ConfigError> {
    let a = lookup(&config.from, index)?;
    let b = lookup(&config.to, index)?;

    let pair = if a <= b { (a, b) } else { (b, a) };
    if !declared.insert(pair) {
        return Err(ConfigError::DuplicateInterchange {
            a: stops[pair.0.0].name().to_string(),
            b: stops[pair.1.0].name().to_string(),
        });
    }

    if a == b {
        let stop = &stops[a.0];
        if !stop.is_shared() {
            return Err(ConfigError::NotAnInterchange {
                stop: stop.name().to_string(),
            });
        }
        if config.minutes != 0 && config.minutes != DEFAULT_INTERCHANGE_MINUTES {
            warn!(
                stop = %stop.key,
                minutes = config.minutes,
                "Transfer time at a shared stop is not charged"
            );
        }
        trace!(stop = %stop.key, lines = stop.lines.len(), "Shared-stop interchange");
        return Ok(Interchange::SharedStop {
            stop: a,
            minutes: config.minutes,
        });
    }

    trace!(
        from = %stops[a.0].key,
        to = %stops[b.0].key,
        minutes = config.minutes,
        "Linked interchange"
    );
    Ok(Interchange::Linked {
        a,
        b,
        minutes: config.minutes,
    })
}

fn lookup(name: &str, index: &HashMap<StopKey, StopId>) -> Result<StopId, ConfigError> {
    StopKey::normalize(name)
        .ok()
        .and_then(|key| index.get(&key).copied())
        .ok_or_else(|| ConfigError::UnknownInterchangeStop {
            stop: normalize_stop_name(name),
        })
}

/// Add a link in both directions.
fn connect(adjacency: &mut [Vec<Link>], a: StopId, b: StopId, minutes: u32, kind: LinkKind) {
    adjacency[a.0].push(Link {
        to: b,
        minutes,
        kind,
    });
    adjacency[b.0].push(Link {
        to: a,
        minutes,
        kind,
    });
}

/// Builder for creating networks.
///
/// Provides a fluent API for declaring lines and interchanges.
///
/// # Example
///
/// ```
/// use metro_router::network::NetworkBuilder;
///
/// let network = NetworkBuilder::new()
///     .line("Blue", 10, &["Rajiv Chowk", "Barakhamba"])
///     .line("Yellow", 10, &["Patel Chowk", "Rajiv Chowk"])
///     .interchange("rajivchowk", "rajivchowk", 5)
///     .build()
///     .unwrap();
///
/// let rajiv = network.resolve("rajivchowk").unwrap();
/// assert_eq!(network.lines_of(rajiv).len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    config: NetworkConfig,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line with its stops in running order.
    pub fn line(mut self, name: &str, minutes_between_stops: u32, stops: &[&str]) -> Self {
        self.config.lines.push(LineConfig {
            name: name.to_string(),
            minutes_between_stops,
            stops: stops.iter().map(|s| (*s).to_string()).collect(),
        });
        self
    }

    /// Add an interchange between two stop names.
    pub fn interchange(mut self, from: &str, to: &str, minutes: u32) -> Self {
        self.config.interchanges.push(InterchangeConfig {
            from: from.to_string(),
            to: to.to_string(),
            minutes,
        });
        self
    }

    /// The configuration collected so far.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Build the network.
    pub fn build(self) -> Result<Network, ConfigError> {
        Network::from_config(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_are_deduplicated_across_lines() {
        let net = NetworkBuilder::new()
            .line("Red", 10, &["a", "b", "c"])
            .line("Green", 10, &["x", "B", "y"])
            .build()
            .unwrap();

        assert_eq!(net.stop_count(), 5);
        let b = net.resolve("b").unwrap();
        assert_eq!(net.lines_of(b).len(), 2);
        assert_eq!(net.line(LineId(1)).stops()[1], b);
    }

    #[test]
    fn names_are_normalized() {
        let net = NetworkBuilder::new()
            .line("Yellow", 10, &["Civil Lines", "Vidhan Sabha"])
            .build()
            .unwrap();

        assert!(net.resolve("civillines").is_some());
        assert!(net.resolve("vidhansabha").is_some());
        assert!(net.resolve("civil lines").is_none());
    }

    #[test]
    fn consecutive_stops_are_linked_with_line_weight() {
        let net = NetworkBuilder::new()
            .line("Red", 3, &["a", "b", "c"])
            .build()
            .unwrap();

        let a = net.resolve("a").unwrap();
        let b = net.resolve("b").unwrap();
        let c = net.resolve("c").unwrap();

        assert_eq!(net.weight(a, b), Some(3));
        assert_eq!(net.weight(b, c), Some(3));
        assert_eq!(net.weight(a, c), None);
        assert_eq!(net.neighbors(a)[0].kind, LinkKind::Ride(LineId(0)));
    }

    #[test]
    fn single_stop_line_has_no_links() {
        let net = NetworkBuilder::new().line("Stub", 10, &["only"]).build().unwrap();
        let only = net.resolve("only").unwrap();
        assert!(net.neighbors(only).is_empty());
    }

    #[test]
    fn shared_stop_interchange_adds_no_link() {
        let net = NetworkBuilder::new()
            .line("Blue", 10, &["a", "hub"])
            .line("Yellow", 10, &["hub", "b"])
            .interchange("hub", "hub", 5)
            .build()
            .unwrap();

        let hub = net.resolve("hub").unwrap();
        assert_eq!(
            net.interchanges(),
            &[Interchange::SharedStop {
                stop: hub,
                minutes: 5
            }]
        );
        assert_eq!(net.weight(hub, hub), None);
        assert_eq!(net.neighbors(hub).len(), 2);
    }

    #[test]
    fn shared_stop_keeps_declared_minutes_without_charging_them() {
        let net = NetworkBuilder::new()
            .line("Blue", 10, &["a", "hub"])
            .line("Yellow", 10, &["hub", "b"])
            .interchange("hub", "hub", 30)
            .build()
            .unwrap();

        let hub = net.resolve("hub").unwrap();
        assert_eq!(
            net.interchanges(),
            &[Interchange::SharedStop {
                stop: hub,
                minutes: 30
            }]
        );
        assert!(net.neighbors(hub).iter().all(|l| l.kind != LinkKind::Interchange));
    }

    #[test]
    fn distinct_stop_interchange_adds_symmetric_link() {
        let net = NetworkBuilder::new()
            .line("Grey", 10, &["dwarka", "nangli"])
            .line("Orange", 10, &["delhiairport", "dwarkasec21"])
            .interchange("dwarka", "dwarkasec21", 5)
            .build()
            .unwrap();

        let dwarka = net.resolve("dwarka").unwrap();
        let sec21 = net.resolve("dwarkasec21").unwrap();
        assert_eq!(net.weight(dwarka, sec21), Some(5));
        assert_eq!(net.weight(sec21, dwarka), Some(5));
        assert_eq!(
            net.interchanges(),
            &[Interchange::Linked {
                a: dwarka,
                b: sec21,
                minutes: 5
            }]
        );
        assert!(
            net.neighbors(dwarka)
                .iter()
                .any(|l| l.to == sec21 && l.kind == LinkKind::Interchange)
        );
    }

    #[test]
    fn empty_line_is_rejected() {
        let err = NetworkBuilder::new().line("Ghost", 10, &[]).build().unwrap_err();
        assert!(matches!(err, ConfigError::EmptyLine { line } if line == "Ghost"));
    }

    #[test]
    fn duplicate_line_is_rejected() {
        let err = NetworkBuilder::new()
            .line("Red", 10, &["a", "b"])
            .line("Red", 10, &["c", "d"])
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateLine { .. }));
    }

    #[test]
    fn blank_stop_name_is_rejected() {
        let err = NetworkBuilder::new()
            .line("Red", 10, &["a", "  "])
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyStopName { .. }));
    }

    #[test]
    fn repeated_stop_is_rejected() {
        let err = NetworkBuilder::new()
            .line("Red", 10, &["a", "b", "B "])
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::RepeatedStop { stop, .. } if stop == "b"));
    }

    #[test]
    fn loop_line_revisiting_a_stop_is_allowed() {
        let net = NetworkBuilder::new()
            .line("Circle", 10, &["a", "b", "c", "a"])
            .build()
            .unwrap();
        assert_eq!(net.stop_count(), 3);
        let a = net.resolve("a").unwrap();
        let c = net.resolve("c").unwrap();
        assert_eq!(net.weight(a, c), Some(10));
    }

    #[test]
    fn unknown_interchange_stop_is_rejected() {
        let err = NetworkBuilder::new()
            .line("Red", 10, &["a", "b"])
            .interchange("a", "Nowhere", 5)
            .build()
            .unwrap_err();
        assert!(
            matches!(err, ConfigError::UnknownInterchangeStop { stop } if stop == "nowhere")
        );
    }

    #[test]
    fn single_line_shared_interchange_is_rejected() {
        let err = NetworkBuilder::new()
            .line("Red", 10, &["a", "b"])
            .interchange("a", "a", 5)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotAnInterchange { .. }));
    }

    #[test]
    fn duplicate_interchange_is_rejected_in_either_order() {
        let err = NetworkBuilder::new()
            .line("Red", 10, &["a", "b"])
            .line("Blue", 10, &["c", "d"])
            .interchange("b", "c", 5)
            .interchange("c", "b", 5)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateInterchange { .. }));
    }

    #[test]
    fn from_config_matches_builder() {
        let builder = NetworkBuilder::new()
            .line("Red", 10, &["a", "b"])
            .line("Blue", 10, &["b", "c"])
            .interchange("b", "b", 5);
        let config = builder.config().clone();

        let from_builder = builder.build().unwrap();
        let from_config = Network::from_config(&config).unwrap();
        assert_eq!(from_builder.list_stops(), from_config.list_stops());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Lines over a small pool of stop names, so that lines overlap.
    fn arb_config() -> impl Strategy<Value = NetworkConfig> {
        let line = (1u32..20, prop::collection::vec(0usize..8, 1..6));
        let interchange = (0usize..8, 0usize..8, 0u32..10);
        (
            prop::collection::vec(line, 1..5),
            prop::collection::vec(interchange, 0..4),
        )
            .prop_map(|(lines, interchanges)| {
                let lines = lines
                    .into_iter()
                    .enumerate()
                    .map(|(i, (minutes, mut stops))| {
                        stops.dedup();
                        LineConfig {
                            name: format!("L{i}"),
                            minutes_between_stops: minutes,
                            stops: stops.into_iter().map(|s| format!("s{s}")).collect(),
                        }
                    })
                    .collect();
                let interchanges = interchanges
                    .into_iter()
                    .map(|(a, b, minutes)| InterchangeConfig {
                        from: format!("s{a}"),
                        to: format!("s{b}"),
                        minutes,
                    })
                    .collect();
                NetworkConfig {
                    lines,
                    interchanges,
                }
            })
    }

    proptest! {
        /// Whenever a configuration builds, weights are symmetric
        #[test]
        fn weights_are_symmetric(config in arb_config()) {
            // Random interchanges may be invalid; those configs are simply skipped
            if let Ok(net) = Network::from_config(&config) {
                for (a, _) in net.stops() {
                    for (b, _) in net.stops() {
                        prop_assert_eq!(net.weight(a, b), net.weight(b, a));
                    }
                }
            }
        }

        /// Every stop key is unique and every stop is served by some line
        #[test]
        fn stops_unique_and_served(config in arb_config()) {
            if let Ok(net) = Network::from_config(&config) {
                let keys: HashSet<_> = net.stops().map(|(_, s)| s.key().clone()).collect();
                prop_assert_eq!(keys.len(), net.stop_count());
                for (_, stop) in net.stops() {
                    prop_assert!(!stop.lines().is_empty());
                }
            }
        }

        /// Ride links only join stops that the ridden line serves
        #[test]
        fn ride_links_follow_membership(config in arb_config()) {
            if let Ok(net) = Network::from_config(&config) {
                for (id, _) in net.stops() {
                    for link in net.neighbors(id) {
                        if let LinkKind::Ride(line) = link.kind {
                            prop_assert!(net.lines_of(id).contains(&line));
                            prop_assert!(net.lines_of(link.to).contains(&line));
                        }
                    }
                }
            }
        }
    }
}
