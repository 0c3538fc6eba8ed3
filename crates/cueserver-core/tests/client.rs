use std::cell::RefCell;
use std::collections::HashMap;

use cueserver_core::{CueServerClient, Model, Playback, Transport};

/// Serves canned `get` responses and records every string it is handed.
#[derive(Default)]
struct FakeTransport {
    responses: HashMap<String, Vec<u8>>,
    requests: RefCell<Vec<String>>,
    commands: RefCell<Vec<String>>,
}

impl FakeTransport {
    fn with_response(request: &str, payload: Vec<u8>) -> Self {
        let mut transport = FakeTransport::default();
        transport.responses.insert(request.to_string(), payload);
        transport
    }
}

impl Transport for FakeTransport {
    fn get(&self, request: &str) -> Option<Vec<u8>> {
        self.requests.borrow_mut().push(request.to_string());
        self.responses.get(request).cloned()
    }

    fn execute(&self, command: &str) {
        self.commands.borrow_mut().push(command.to_string());
    }
}

fn system_info_payload() -> Vec<u8> {
    let mut payload = vec![0u8; 78];
    payload[..6].copy_from_slice(b"SN-042");
    payload[16..21].copy_from_slice(b"Stage");
    payload[40..45].copy_from_slice(b"4.0.1");
    payload[52..57].copy_from_slice(b"09:15");
    payload[76] = 4;
    payload[77] = 0;
    payload
}

#[test]
fn system_info_round_trip() {
    let transport = FakeTransport::with_response("SI", system_info_payload());
    let client = CueServerClient::new(&transport);

    let info = client.system_info().expect("system info");
    assert_eq!(info.serial_number, "SN-042");
    assert_eq!(info.device_name, "Stage");
    assert_eq!(info.firmware_version, "4.0.1");
    assert_eq!(info.time, "09:15");
    assert_eq!(info.model, Model::Cs840);
    assert!(!info.has_password);

    assert_eq!(transport.requests.borrow().as_slice(), ["SI"]);
}

#[test]
fn system_info_absent_on_no_response() {
    let transport = FakeTransport::default();
    let client = CueServerClient::new(&transport);
    assert_eq!(client.system_info(), None);
}

#[test]
fn system_info_absent_on_truncated_response() {
    let transport = FakeTransport::with_response("SI", vec![0u8; 40]);
    let client = CueServerClient::new(&transport);
    assert_eq!(client.system_info(), None);
}

#[test]
fn playback_status_round_trip() {
    let mut payload = vec![0u8; 48];
    payload[0] = 10;
    let transport = FakeTransport::with_response("PS", payload);
    let client = CueServerClient::new(&transport);

    let status = client.playback_status().expect("status");
    let pb1 = status.playback(Playback::Playback1);
    assert_eq!(pb1.current_cue.as_ref().expect("cue").number(), 1.0);
    for playback in [Playback::Playback2, Playback::Playback3, Playback::Playback4] {
        assert_eq!(status.playback(playback).current_cue, None);
        assert_eq!(status.playback(playback).next_cue, None);
    }
    assert_eq!(pb1.next_cue, None);
    assert_eq!(transport.requests.borrow().as_slice(), ["PS"]);
}

#[test]
fn detailed_playback_status_uses_playback_id_in_request() {
    let mut payload = vec![0u8; 96];
    payload[2] = 255;
    payload[12..14].copy_from_slice(&15u16.to_le_bytes());
    payload[32..37].copy_from_slice(b"intro");
    let transport = FakeTransport::with_response("PI&id=2", payload);
    let client = CueServerClient::new(&transport);

    let status = client
        .detailed_playback_status(Playback::Playback2)
        .expect("status");
    assert_eq!(status.playback, Playback::Playback2);
    assert_eq!(status.master_level, 255);
    let current = status.current_cue.expect("cue");
    assert_eq!(current.number(), 1.5);
    assert_eq!(current.name(), Some("intro"));

    assert_eq!(transport.requests.borrow().as_slice(), ["PI&id=2"]);
}

#[test]
fn output_levels_round_trip() {
    let mut payload = vec![0u8; 512];
    payload[5] = 200;
    let transport = FakeTransport::with_response("OUT", payload);
    let client = CueServerClient::new(&transport);

    let levels = client.output_levels().expect("levels");
    assert_eq!(levels[5], 200);
    assert_eq!(levels.len(), 512);
    assert_eq!(transport.requests.borrow().as_slice(), ["OUT"]);
}

#[test]
fn play_cue_submits_exact_command() {
    let transport = FakeTransport::default();
    let client = CueServerClient::new(&transport);

    client.play_cue_on(10.25, Playback::Playback2).expect("valid");
    assert_eq!(transport.commands.borrow().as_slice(), ["P+2+Q+10.2+GO"]);
}

#[test]
fn play_cue_defaults_to_playback_1() {
    let transport = FakeTransport::default();
    let client = CueServerClient::new(&transport);

    client.play_cue(1.0).expect("valid");
    assert_eq!(transport.commands.borrow().as_slice(), ["P+1+Q+1.0+GO"]);
}

#[test]
fn clear_playback_submits_exact_command() {
    let transport = FakeTransport::default();
    let client = CueServerClient::new(&transport);

    client.clear_playback(Playback::Playback3);
    assert_eq!(transport.commands.borrow().as_slice(), ["P+3+CL"]);
}

#[test]
fn set_channel_submits_exact_command() {
    let transport = FakeTransport::default();
    let client = CueServerClient::new(&transport);

    client.set_channel(1, 255).expect("valid");
    assert_eq!(
        transport.commands.borrow().as_slice(),
        ["T+0.0+P1+C+1+A+%23255"]
    );
}

#[test]
fn set_channel_range_submits_exact_command() {
    let transport = FakeTransport::default();
    let client = CueServerClient::new(&transport);

    client.set_channel_range(1, 10, 255).expect("valid");
    assert_eq!(
        transport.commands.borrow().as_slice(),
        ["T+0.0+P1+C+1%3E10+A%23255"]
    );
}

#[test]
fn record_delete_update_cue_commands() {
    let transport = FakeTransport::default();
    let client = CueServerClient::new(&transport);

    client.record_cue(10.2, 3.0, 5.5).expect("valid");
    client.delete_cue(2.0).expect("valid");
    client.update_cue(7.1).expect("valid");
    assert_eq!(
        transport.commands.borrow().as_slice(),
        ["FA+3.0%2F5.5%3BRQ+10.2", "DELQ+2.0", "UQ+7.1"]
    );
}

#[test]
fn invalid_parameters_never_reach_the_transport() {
    let transport = FakeTransport::default();
    let client = CueServerClient::new(&transport);

    assert!(client.play_cue(0.0).is_err());
    assert!(client.set_channel(0, 0).is_err());
    assert!(client.set_channel(513, 0).is_err());
    assert!(client.set_channel(1, 256).is_err());
    assert!(client.set_channel_with(1, 0, -1.0, Playback::Playback1).is_err());
    assert!(client.set_channel_range(10, 1, 255).is_err());
    assert!(client.record_cue(1.0, 65001.0, 0.0).is_err());
    assert!(client.delete_cue(-1.0).is_err());

    assert!(transport.commands.borrow().is_empty());
    assert!(transport.requests.borrow().is_empty());
}
