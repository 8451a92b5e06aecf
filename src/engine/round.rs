use std::f32::consts::FRAC_PI_2;
use std::ops::Range;

use tracing::{debug, error};

use crate::anim::{AnimationEvent, AnimationScheduler, ChoreographyRules, EntityId, TweenScheduler};
use crate::domain::card::CardData;
use crate::domain::deck::Deck;
use crate::domain::geometry::{bearing, Transform, Vec3};
use crate::domain::layout::{SeatIndex, TableLayout, BOARD_SLOTS, HERO_SEAT, SEAT_COUNT};
use crate::domain::phase::{RoundPhase, READY_STATUS};
use crate::domain::RoundId;
use crate::engine::card::Card;
use crate::engine::errors::EngineError;
use crate::engine::round_history::{RoundEventKind, RoundHistory};
use crate::engine::RandomSource;
use crate::infra::{IdGenerator, RngSeed, SystemRng};
use crate::scene::{CardAssets, ProceduralAssets, SceneSurface, StatusSink};

/// Карманных карт на место.
pub const HOLE_CARDS: usize = 2;
/// Слоты борда по улицам.
pub const FLOP_SLOTS: Range<usize> = 0..3;
pub const TURN_SLOTS: Range<usize> = 3..4;
pub const RIVER_SLOTS: Range<usize> = 4..BOARD_SLOTS;

/// Итог вызова метода раздачи.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Переход выполнен.
    Advanced { from: RoundPhase, to: RoundPhase },
    /// Вызов не подходит к текущей фазе и проигнорирован (повторный клик и т.п.).
    Ignored { phase: RoundPhase },
}

impl Transition {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Transition::Ignored { .. })
    }

    /// Фаза после вызова.
    pub fn phase(&self) -> RoundPhase {
        match *self {
            Transition::Advanced { to, .. } => to,
            Transition::Ignored { phase } => phase,
        }
    }
}

/// Контроллер раунда: IDLE → PREFLOP → FLOP → TURN → RIVER → IDLE.
///
/// Каждый переход берёт карты из колоды, заводит под них сущности на сцене и
/// подаёт хореографию в планировщик с рассчитанными задержками. Ни один метод
/// не ждёт окончания анимаций.
pub struct RoundStateMachine<S: AnimationScheduler = TweenScheduler> {
    phase: RoundPhase,
    deck: Deck,
    layout: TableLayout,
    rules: ChoreographyRules,
    scheduler: S,

    deck_rng: Box<dyn RandomSource>,
    jitter_rng: Box<dyn RandomSource>,
    /// Если задан, RNG колоды и косметики выводятся из него заново на каждый раунд.
    seed: Option<RngSeed>,

    assets: Box<dyn CardAssets>,
    scene: Option<Box<dyn SceneSurface>>,
    status: Option<Box<dyn StatusSink>>,
    /// Последний опубликованный статус.
    status_line: &'static str,

    /// Все карты, взятые с момента последнего сброса (владение здесь).
    drawn: Vec<Card>,
    hands: [Vec<EntityId>; SEAT_COUNT],
    board: Vec<EntityId>,

    ids: IdGenerator,
    round_id: RoundId,
    history: RoundHistory,
}

impl RoundStateMachine<TweenScheduler> {
    /// Стандартный стол и тайминги, встроенный планировщик, системный RNG.
    pub fn standard() -> Self {
        Self::new(TweenScheduler::new())
    }
}

impl<S: AnimationScheduler> RoundStateMachine<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            phase: RoundPhase::Idle,
            deck: Deck::default(),
            layout: TableLayout::standard(),
            rules: ChoreographyRules::standard(),
            scheduler,
            deck_rng: Box::new(SystemRng),
            jitter_rng: Box::new(SystemRng),
            seed: None,
            assets: Box::new(ProceduralAssets::new()),
            scene: None,
            status: None,
            status_line: READY_STATUS,
            drawn: Vec::new(),
            hands: Default::default(),
            board: Vec::new(),
            ids: IdGenerator::new(),
            round_id: 0,
            history: RoundHistory::new(),
        }
    }

    pub fn with_layout(mut self, layout: TableLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_rules(mut self, rules: ChoreographyRules) -> Self {
        self.rules = rules;
        self
    }

    /// Отдельные источники для колоды и для косметики.
    pub fn with_rngs<D, J>(mut self, deck_rng: D, jitter_rng: J) -> Self
    where
        D: RandomSource + 'static,
        J: RandomSource + 'static,
    {
        self.deck_rng = Box::new(deck_rng);
        self.jitter_rng = Box::new(jitter_rng);
        self.seed = None;
        self
    }

    /// Воспроизводимые раунды: потоки колоды и косметики выводятся из seed.
    pub fn with_seed(mut self, seed: RngSeed) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_assets(mut self, assets: impl CardAssets + 'static) -> Self {
        self.assets = Box::new(assets);
        self
    }

    pub fn with_scene(mut self, scene: impl SceneSurface + 'static) -> Self {
        self.scene = Some(Box::new(scene));
        self
    }

    pub fn with_status(mut self, status: impl StatusSink + 'static) -> Self {
        self.status = Some(Box::new(status));
        self
    }

    // --- Чтение состояния ---

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Прямой доступ к колоде – для диагностики и тестов.
    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn rules(&self) -> &ChoreographyRules {
        &self.rules
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Текст, который сейчас висит в статусной строке.
    pub fn status(&self) -> &'static str {
        self.status_line
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    /// Номер текущего (или последнего) раунда; 0 – раундов ещё не было.
    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    /// Все карты на столе с последнего сброса, включая уже "закрытый" раунд.
    pub fn drawn(&self) -> &[Card] {
        &self.drawn
    }

    pub fn card(&self, entity: EntityId) -> Option<&Card> {
        self.drawn.iter().find(|c| c.entity == entity)
    }

    pub fn hand(&self, seat: SeatIndex) -> Result<Vec<&Card>, EngineError> {
        let ids = self.hands.get(seat).ok_or(EngineError::InvalidSeat(seat))?;
        Ok(ids.iter().filter_map(|id| self.card(*id)).collect())
    }

    /// Карты борда в порядке слотов.
    pub fn board(&self) -> Vec<&Card> {
        self.board.iter().filter_map(|id| self.card(*id)).collect()
    }

    pub fn transform_of(&self, card: &Card) -> Option<Transform> {
        card.transform(&self.scheduler)
    }

    // --- Такт ---

    /// Продвинуть анимации на `dt` секунд.
    pub fn tick(&mut self, dt: f32) -> Vec<AnimationEvent> {
        self.scheduler.advance(dt)
    }

    /// Крутить такт, пока все анимации не закончатся (не больше `max_frames` кадров).
    /// Возвращает, сколько кадров понадобилось.
    pub fn settle(&mut self, dt: f32, max_frames: usize) -> usize {
        let mut frames = 0;
        while !self.scheduler.is_idle() && frames < max_frames {
            self.scheduler.advance(dt);
            frames += 1;
        }
        frames
    }

    // --- Фазы игры ---

    /// IDLE → PREFLOP: новая колода, по 2 карты на каждое из 6 мест по кругу.
    pub fn deal_hole_cards(&mut self) -> Result<Transition, EngineError> {
        if self.phase != RoundPhase::Idle {
            return Ok(self.ignore("deal_hole_cards"));
        }

        self.reset_round();
        let cards = self.draw_for_deal(SEAT_COUNT * HOLE_CARDS)?;
        let center = self.layout.center;

        // Сначала первая карта каждому месту, потом вторая.
        for (order, data) in cards.into_iter().enumerate() {
            let pass = order / SEAT_COUNT;
            let seat = order % SEAT_COUNT;
            let anchor = self.layout.seats[seat];
            let delay = self.rules.stagger_delay(order);
            let offset = if pass == 0 {
                -self.rules.hole_card_offset
            } else {
                self.rules.hole_card_offset
            };
            let yaw = bearing(anchor, center) + FRAC_PI_2;

            let idx = self.spawn_card(data);
            let rules = &self.rules;
            let card = &mut self.drawn[idx];

            card.move_to(
                &mut self.scheduler,
                anchor.offset_lateral(offset),
                delay,
                rules.move_duration,
            );

            if seat == HERO_SEAT {
                card.rotate_to(
                    &mut self.scheduler,
                    Vec3::new(rules.hero_tilt_x, yaw, 0.0),
                    delay,
                    rules.rotate_duration,
                );
                card.reveal_to_viewer(
                    &mut self.scheduler,
                    rules.hero_reveal_rotation,
                    delay + rules.hero_reveal_delay,
                    rules.hero_reveal_duration,
                );
            } else {
                // Боты: плашмя, рубашкой вверх, лицом к центру стола.
                card.rotate_to(
                    &mut self.scheduler,
                    Vec3::new(rules.bot_tilt_x, yaw, 0.0),
                    delay,
                    rules.rotate_duration,
                );
            }

            let entity = card.entity;
            self.hands[seat].push(entity);
            self.history.push(RoundEventKind::HoleCardDealt {
                seat,
                card: data,
                entity,
                delay,
            });
        }

        Ok(self.enter(RoundPhase::Preflop))
    }

    /// PREFLOP → FLOP: три общие карты.
    pub fn deal_flop(&mut self) -> Result<Transition, EngineError> {
        self.deal_board(RoundPhase::Preflop, RoundPhase::Flop, FLOP_SLOTS, "deal_flop")
    }

    /// FLOP → TURN.
    pub fn deal_turn(&mut self) -> Result<Transition, EngineError> {
        self.deal_board(RoundPhase::Flop, RoundPhase::Turn, TURN_SLOTS, "deal_turn")
    }

    /// TURN → RIVER.
    pub fn deal_river(&mut self) -> Result<Transition, EngineError> {
        self.deal_board(RoundPhase::Turn, RoundPhase::River, RIVER_SLOTS, "deal_river")
    }

    /// RIVER → IDLE. Очищает учёт рук и борда; колода перемешается при следующей раздаче.
    pub fn end_round(&mut self) -> Result<Transition, EngineError> {
        if self.phase != RoundPhase::River {
            return Ok(self.ignore("end_round"));
        }
        Ok(self.finish_round(false))
    }

    /// Принудительно закончить раунд из любой фазы кроме IDLE.
    pub fn fold(&mut self) -> Result<Transition, EngineError> {
        if !self.phase.in_round() {
            return Ok(self.ignore("fold"));
        }
        Ok(self.finish_round(true))
    }

    /// Выполнить тот переход, который допустим в текущей фазе.
    pub fn advance(&mut self) -> Result<Transition, EngineError> {
        match self.phase {
            RoundPhase::Idle => self.deal_hole_cards(),
            RoundPhase::Preflop => self.deal_flop(),
            RoundPhase::Flop => self.deal_turn(),
            RoundPhase::Turn => self.deal_river(),
            RoundPhase::River => self.end_round(),
        }
    }

    // --- Внутреннее ---

    fn deal_board(
        &mut self,
        expected: RoundPhase,
        next: RoundPhase,
        slots: Range<usize>,
        action: &'static str,
    ) -> Result<Transition, EngineError> {
        if self.phase != expected {
            return Ok(self.ignore(action));
        }

        let cards = self.draw_for_deal(slots.len())?;

        for (i, (slot, data)) in slots.zip(cards).enumerate() {
            let target = self.layout.board_slots[slot];
            let move_delay = i as f32 * self.rules.board_stagger;
            // Переворот отстаёт от хода, чтобы карта успела долететь.
            let flip_delay = self.rules.board_flip_lead + move_delay;

            let idx = self.spawn_card(data);
            let rules = &self.rules;
            let card = &mut self.drawn[idx];

            card.move_to(&mut self.scheduler, target, move_delay, rules.move_duration);
            // Приземление – на высоту самого слота, какой бы её ни задал стол.
            card.flip(
                &mut self.scheduler,
                &mut *self.jitter_rng,
                &rules.flip,
                target.y,
                flip_delay,
            );

            let entity = card.entity;
            self.board.push(entity);
            self.history.push(RoundEventKind::BoardCardDealt {
                phase: next,
                slot,
                card: data,
                entity,
                delay: move_delay,
            });
        }

        Ok(self.enter(next))
    }

    /// Взять карты под раздачу целиком; нехватка – фатальна для этого вызова.
    fn draw_for_deal(&mut self, count: usize) -> Result<Vec<CardData>, EngineError> {
        self.deck.draw_many(count).map_err(|err| {
            error!(
                phase = %self.phase,
                requested = err.requested,
                remaining = err.remaining,
                "deck exhausted, deal aborted"
            );
            EngineError::from(err)
        })
    }

    /// Завести карту в точке колоды: плашмя, рубашкой вверх, с лёгким случайным наклоном.
    fn spawn_card(&mut self, data: CardData) -> usize {
        let twist = self.jitter_rng.unit_f32() * self.rules.spawn_twist_max;
        let face_down = self.rules.flip.face_down_rotation;
        let initial = Transform::new(
            self.layout.deck_position,
            Vec3::new(face_down.x, face_down.y, twist),
        );

        let entity = self.scheduler.spawn(initial);
        let visual = self.assets.visual_for(data);
        if let Some(scene) = self.scene.as_mut() {
            scene.add(entity, &visual);
        }

        self.drawn.push(Card::new(entity, data, visual));
        self.drawn.len() - 1
    }

    /// Убрать прошлый раунд со сцены и пересобрать колоду.
    fn reset_round(&mut self) {
        for card in self.drawn.drain(..) {
            if let Some(scene) = self.scene.as_mut() {
                scene.remove(card.entity);
            }
            self.scheduler.despawn(card.entity);
        }
        for hand in self.hands.iter_mut() {
            hand.clear();
        }
        self.board.clear();

        self.round_id = self.ids.next_round_id();
        if let Some(seed) = &self.seed {
            self.deck_rng = Box::new(seed.derive(RngSeed::DECK_STREAM, self.round_id).to_rng());
            self.jitter_rng =
                Box::new(seed.derive(RngSeed::JITTER_STREAM, self.round_id).to_rng());
        }
        self.deck.reset(&mut *self.deck_rng);

        self.history = RoundHistory::new();
        self.history.push(RoundEventKind::RoundStarted {
            round_id: self.round_id,
        });
    }

    fn finish_round(&mut self, folded: bool) -> Transition {
        for hand in self.hands.iter_mut() {
            hand.clear();
        }
        self.board.clear();
        self.history.push(RoundEventKind::RoundEnded {
            round_id: self.round_id,
            folded,
        });
        self.enter(RoundPhase::Idle)
    }

    fn enter(&mut self, next: RoundPhase) -> Transition {
        let from = self.phase;
        self.phase = next;
        self.history
            .push(RoundEventKind::PhaseChanged { from, to: next });
        debug!(%from, to = %next, round_id = self.round_id, deck_left = self.deck.len(), "phase changed");
        self.publish_status(next.status_text());
        Transition::Advanced { from, to: next }
    }

    fn ignore(&self, action: &'static str) -> Transition {
        debug!(action, phase = %self.phase, "trigger ignored in this phase");
        Transition::Ignored { phase: self.phase }
    }

    fn publish_status(&mut self, text: &'static str) {
        self.status_line = text;
        match self.status.as_mut() {
            Some(sink) => sink.set_status(text),
            None => debug!(status = text, "no status sink attached"),
        }
    }
}
