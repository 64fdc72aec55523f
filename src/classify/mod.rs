//! Prompt construction and response parsing for the two LLM-derived labels.

pub mod rating;
pub mod topic;

use tracing::{debug, instrument, warn};

use crate::{error::TriageResult, llm::Completer};

pub use rating::StarRating;
pub use topic::Topic;

/// A parsed label together with the trimmed model text it came from.
///
/// The record stores `raw`; `value` only drives logging and the API view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer<T> {
    pub value: T,
    pub raw: String,
}

impl Answer<Topic> {
    pub fn topic(raw: &str) -> Self {
        Self {
            value: Topic::parse(raw),
            raw: raw.trim().to_string(),
        }
    }
}

impl Answer<StarRating> {
    pub fn rating(raw: &str) -> Self {
        Self {
            value: StarRating::parse(raw),
            raw: raw.trim().to_string(),
        }
    }
}

/// Prompt restricting the model to the fixed topic labels.
pub fn topic_prompt(comment: &str) -> String {
    format!(
        "Tu tarea es clasificar comentarios basándote únicamente en el contenido mencionado en el texto del comentario. \
         Deberás asignar el comentario a uno de los siguientes tópicos específicos: 'cocina', 'servicio', 'baños', 'comida', 'otros'. \
         Es crucial que tu respuesta se limite solo al nombre del tópico correspondiente sin incluir opiniones, observaciones adicionales \
         o cualquier otro tipo de elaboración. A continuación se te proporcionará un comentario, y tu deber es identificar claramente el tópico relevante \
         basado en el contenido del mismo. No asumas información que no esté explícitamente mencionada en el comentario.\n\n\
         Comentario: {comment}\nTópico:"
    )
}

/// Prompt asking for a one-to-five star emoji rating and nothing else.
pub fn rating_prompt(comment: &str) -> String {
    format!(
        "¡Necesitamos tu ayuda para evaluar este comentario! Por favor, lee detenidamente el siguiente comentario \
         y califícalo con estrellas del 1 al 5 basado en su utilidad, claridad y relevancia. Utiliza solo los emojis \
         de estrellas para tu respuesta. No incluyas ningún otro símbolo, número o texto adicional. Copia y pega \
         las estrellas correspondientes del siguiente conjunto: ⭐, ⭐⭐, ⭐⭐⭐, ⭐⭐⭐⭐, ⭐⭐⭐⭐⭐. No modifiques el formato ni \
         alteres los emojis. Tu participación es esencial para mantener la integridad y precisión de nuestras evaluaciones. \
         Gracias por tu colaboración.\n\n\
         Comentario: {comment}\nEstrellas:"
    )
}

#[instrument(skip_all)]
pub async fn classify_topic(completer: &dyn Completer, comment: &str) -> TriageResult<Answer<Topic>> {
    let answer = Answer::topic(&completer.complete(&topic_prompt(comment)).await?);
    if answer.value.is_recognized() {
        debug!(topic = %answer.value, "topic classified");
    } else {
        warn!(raw = %answer.raw, "topic outside the label set; storing as returned");
    }
    Ok(answer)
}

#[instrument(skip_all)]
pub async fn score_rating(
    completer: &dyn Completer,
    comment: &str,
) -> TriageResult<Answer<StarRating>> {
    let answer = Answer::rating(&completer.complete(&rating_prompt(comment)).await?);
    match answer.value.stars() {
        Some(stars) => debug!(stars, "comment rated"),
        None => warn!(raw = %answer.raw, "rating is not one to five stars; storing as returned"),
    }
    Ok(answer)
}
