use serde::{Deserialize, Serialize};

use crate::core::board::{Board, Disc};

/*
====================
Diagnostic Response
====================
*/

#[derive(Deserialize, Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/*
====================
Turn Payload and Response
====================
*/

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePayload {
    pub disc: Disc,
    pub x: i32,
    pub y: i32,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTurnPayload {
    pub turn_count: i32,
    #[serde(rename = "move")]
    pub placement: MovePayload,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetTurnResponse {
    pub turn_count: i32,
    pub board: Board,
    pub next_disc: Option<Disc>,
    pub winner_disc: Option<Disc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn register_turn_payload_reads_camel_case_body() {
        let payload: RegisterTurnPayload = serde_json::from_value(json!({
            "turnCount": 1,
            "move": { "disc": 1, "x": 2, "y": 3 }
        }))
        .unwrap();
        assert_eq!(payload.turn_count, 1);
        assert_eq!(
            payload.placement,
            MovePayload {
                disc: Disc::Dark,
                x: 2,
                y: 3
            }
        );
    }

    #[test]
    fn unknown_disc_in_body_is_rejected() {
        let result = serde_json::from_value::<RegisterTurnPayload>(json!({
            "turnCount": 1,
            "move": { "disc": 7, "x": 2, "y": 3 }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn turn_response_has_null_winner() {
        let resp = GetTurnResponse {
            turn_count: 0,
            board: Board::initial(),
            next_disc: Some(Disc::Dark),
            winner_disc: None,
        };
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["turnCount"], json!(0));
        assert_eq!(value["nextDisc"], json!(1));
        assert!(value["winnerDisc"].is_null());
        assert_eq!(value["board"][4][4], json!(1));
        assert_eq!(value["board"][4][3], json!(2));
    }
}
